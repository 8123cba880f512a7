//! The `ppdrill topics` command.

use anyhow::Result;
use comfy_table::Table;

use ppdrill_core::{Topic, TopicSelector};

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Slug", "Topic"]);
    for topic in Topic::ALL {
        table.add_row(vec![topic.slug(), topic.label()]);
    }
    let mixed = TopicSelector::Mixed;
    table.add_row(vec![mixed.slug(), mixed.label()]);
    println!("{table}");
    Ok(())
}
