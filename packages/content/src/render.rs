//! Values the page derives from the document at render time.

use crate::{Network, Portfolio};

/// Token in `network.statusLines` replaced with the node count
pub const COUNT_TOKEN: &str = "{count}";

impl Network {
    /// Status lines with the first `{count}` in each line filled in
    pub fn rendered_status_lines(&self) -> Vec<String> {
        let count = self.nodes.len().to_string();
        self.status_lines
            .iter()
            .map(|line| line.replacen(COUNT_TOKEN, &count, 1))
            .collect()
    }
}

impl Portfolio {
    /// Row number shown in the accordion, from list position (not `id`)
    pub fn display_number(index: usize) -> String {
        format!("{:02}", index + 1)
    }
}
