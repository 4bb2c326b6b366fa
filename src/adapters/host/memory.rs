//! In-memory document tree.

use super::PrintHost;
use crate::render::{escape_html, page};
use crate::{Error, Result};

/// Handle to a container attached to a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Debug, Clone)]
struct AttachedNode {
    id: NodeId,
    container_id: String,
    markup: String,
}

/// A page held in memory whose print action snapshots the whole page.
///
/// Each successful [`PrintHost::print`] records one job holding the
/// serialized page, including every container attached at that moment.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    title: String,
    base_body: String,
    nodes: Vec<AttachedNode>,
    next_id: u64,
    jobs: Vec<String>,
    print_failure: Option<String>,
}

impl MemoryPage {
    /// Creates a page with fixed on-screen content.
    pub fn new(title: impl Into<String>, base_body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            base_body: base_body.into(),
            ..Default::default()
        }
    }

    /// Makes every print action fail with `reason`, as when the user
    /// cancels the dialog or the platform denies printing.
    pub fn with_print_failure(mut self, reason: impl Into<String>) -> Self {
        self.print_failure = Some(reason.into());
        self
    }

    /// Number of containers currently attached.
    pub fn attached(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, container_id: &str) -> bool {
        self.nodes.iter().any(|n| n.container_id == container_id)
    }

    /// Serializes the page as it currently stands.
    pub fn render_page(&self) -> String {
        let mut body = self.base_body.clone();
        for node in &self.nodes {
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(&format!(
                "<div id=\"{}\">{}</div>",
                escape_html(&node.container_id),
                node.markup
            ));
        }
        page(&self.title, &body)
    }

    pub fn jobs(&self) -> &[String] {
        &self.jobs
    }

    pub fn take_jobs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.jobs)
    }
}

impl PrintHost for MemoryPage {
    type Node = NodeId;

    fn attach(&mut self, container_id: &str, markup: &str) -> Result<NodeId> {
        if self.contains(container_id) {
            return Err(Error::Attach(format!(
                "element #{container_id} is already attached"
            )));
        }

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(AttachedNode {
            id,
            container_id: container_id.to_string(),
            markup: markup.to_string(),
        });
        Ok(id)
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        match self.nodes.iter().position(|n| n.id == node) {
            Some(index) => {
                self.nodes.remove(index);
                Ok(())
            }
            None => Err(Error::Detach(format!("node {} is not attached", node.0))),
        }
    }

    fn print(&mut self) -> Result<()> {
        if let Some(reason) = &self.print_failure {
            return Err(Error::PrintFailed(reason.clone()));
        }
        let snapshot = self.render_page();
        self.jobs.push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_then_detach() {
        let mut page = MemoryPage::new("App", "<main>app</main>");
        let node = page.attach("print-container", "<p>x</p>").expect("attach");
        assert!(page.contains("print-container"));
        assert!(page
            .render_page()
            .contains("<main>app</main>\n<div id=\"print-container\"><p>x</p></div>"));

        page.detach(node).expect("detach");
        assert_eq!(page.attached(), 0);
        assert!(!page.render_page().contains("print-container"));
    }

    #[test]
    fn test_duplicate_container_rejected() {
        let mut page = MemoryPage::default();
        page.attach("c", "").expect("first attach");
        assert!(matches!(page.attach("c", ""), Err(Error::Attach(_))));
    }

    #[test]
    fn test_detach_unknown_node() {
        let mut page = MemoryPage::default();
        let node = page.attach("c", "").expect("attach");
        page.detach(node).expect("detach");
        assert!(matches!(page.detach(node), Err(Error::Detach(_))));
    }

    #[test]
    fn test_print_records_snapshot() {
        let mut page = MemoryPage::new("App", "");
        page.attach("c", "<p>doc</p>").expect("attach");
        page.print().expect("print");
        assert_eq!(page.jobs().len(), 1);
        assert!(page.jobs()[0].contains("<p>doc</p>"));
        assert_eq!(page.take_jobs().len(), 1);
        assert!(page.jobs().is_empty());
    }

    #[test]
    fn test_print_failure() {
        let mut page = MemoryPage::default().with_print_failure("cancelled");
        assert!(matches!(page.print(), Err(Error::PrintFailed(reason)) if reason == "cancelled"));
        assert!(page.jobs().is_empty());
    }
}
