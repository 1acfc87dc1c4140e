//! `studio channels`: what the host answers.

use anyhow::Result;
use studio_bridge::{Host, HostConfig};

use crate::output;

pub fn handle() -> Result<()> {
    let host = Host::new(HostConfig::from_env());
    let described = host.describe();

    output::header("Host Channels");
    let mut table = output::table();
    output::table_header(&mut table, "Channel", "Description");
    let items: Vec<_> = described
        .iter()
        .map(|(channel, desc)| {
            output::table_row(&mut table, channel.as_str(), desc);
            (channel.as_str(), *desc)
        })
        .collect();
    output::table_print(&table, &items);
    Ok(())
}
