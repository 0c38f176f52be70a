//! Composite pattern: files and directories treated uniformly.

/// A file-system node. Directories contain nodes of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { name: String, size: u64 },
    Directory { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::File {
            name: name.into(),
            size,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Directory { name, .. } => name,
        }
    }

    /// Adds a child. Files cannot hold children; the node is handed back.
    pub fn add(&mut self, node: Node) -> Result<(), Node> {
        match self {
            Self::Directory { children, .. } => {
                children.push(node);
                Ok(())
            }
            Self::File { .. } => Err(node),
        }
    }

    /// Total bytes below (and including) this node. Saturates at `u64::MAX`.
    pub fn size(&self) -> u64 {
        match self {
            Self::File { size, .. } => *size,
            Self::Directory { children, .. } => children
                .iter()
                .fold(0u64, |total, child| total.saturating_add(child.size())),
        }
    }

    pub fn count_files(&self) -> usize {
        match self {
            Self::File { .. } => 1,
            Self::Directory { children, .. } => children.iter().map(Node::count_files).sum(),
        }
    }

    /// Depth-first search by name, this node included.
    pub fn find(&self, target: &str) -> Option<&Node> {
        if self.name() == target {
            return Some(self);
        }
        match self {
            Self::File { .. } => None,
            Self::Directory { children, .. } => children.iter().find_map(|c| c.find(target)),
        }
    }

    /// Indented listing, two spaces per level.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            Self::File { name, size } => lines.push(format!("{}{} ({} B)", indent, name, size)),
            Self::Directory { name, children } => {
                lines.push(format!("{}{}/ ({} B)", indent, name, self.size()));
                for child in children {
                    child.render_into(depth + 1, lines);
                }
            }
        }
    }
}
