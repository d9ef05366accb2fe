// 📁 File Tree
// Files and directories share one shape; sizes aggregate recursively

use serde::{Deserialize, Serialize};

// ============================================================================
// TREE
// ============================================================================

/// A node in the tree: a leaf file with a fixed size, or a directory owning
/// an ordered sequence of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsEntry {
    File { name: String, size: u64 },
    Directory(Directory),
}

impl FsEntry {
    pub fn file(name: &str, size: u64) -> Self {
        FsEntry::File {
            name: name.to_string(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsEntry::File { name, .. } => name,
            FsEntry::Directory(dir) => &dir.name,
        }
    }

    /// Leaf size, or the recursive sum of children for a directory.
    pub fn size(&self) -> u64 {
        match self {
            FsEntry::File { size, .. } => *size,
            FsEntry::Directory(dir) => dir.size(),
        }
    }

    /// Depth-first pre-order rendering: a directory prints itself before its
    /// children, children in insertion order, indentation per depth.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            FsEntry::File { name, size } => {
                lines.push(format!("{}📄 {} ({} bytes)", indent, name, size));
            }
            FsEntry::Directory(dir) => {
                lines.push(format!("{}📁 {}/", indent, dir.name));
                for child in &dir.children {
                    child.render_into(depth + 1, lines);
                }
            }
        }
    }
}

/// Interior node. Owns its children; insertion order is preserved and
/// duplicates are not policed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    name: String,
    children: Vec<FsEntry>,
}

impl Directory {
    pub fn new(name: &str) -> Self {
        Directory {
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, entry: FsEntry) {
        self.children.push(entry);
    }

    /// Remove the first child with the given name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<FsEntry> {
        let position = self.children.iter().position(|c| c.name() == name)?;
        Some(self.children.remove(position))
    }

    pub fn size(&self) -> u64 {
        self.children.iter().map(FsEntry::size).sum()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn into_entry(self) -> FsEntry {
        FsEntry::Directory(self)
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: a small document tree, its per-directory sizes, and
/// the rendered structure.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Composite Pattern...");

    let mut documents = Directory::new("Documents");
    documents.add(FsEntry::file("report.txt", 1024));
    documents.add(FsEntry::file("document.pdf", 5120));

    let mut pictures = Directory::new("Pictures");
    pictures.add(FsEntry::file("image.jpg", 2048));

    println!("   Documents size: {} bytes", documents.size());
    println!("   Pictures size: {} bytes", pictures.size());

    let mut root = Directory::new("Root");
    root.add(documents.into_entry());
    root.add(pictures.into_entry());

    println!("   Root size: {} bytes", root.size());
    println!("   File structure:");
    for line in root.into_entry().render() {
        println!("   {}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Directory {
        let mut documents = Directory::new("Documents");
        documents.add(FsEntry::file("report.txt", 1024));
        documents.add(FsEntry::file("document.pdf", 5120));

        let mut pictures = Directory::new("Pictures");
        pictures.add(FsEntry::file("image.jpg", 2048));

        let mut root = Directory::new("Root");
        root.add(documents.into_entry());
        root.add(pictures.into_entry());
        root
    }

    #[test]
    fn test_root_size_is_sum_of_all_leaves() {
        let root = sample_tree();
        assert_eq!(root.size(), 8192);
    }

    #[test]
    fn test_removal_shrinks_ancestors_by_leaf_size() {
        let mut root = sample_tree();

        let documents = match root.remove("Documents") {
            Some(FsEntry::Directory(mut dir)) => {
                let removed = dir.remove("report.txt").unwrap();
                assert_eq!(removed.size(), 1024);
                dir
            }
            _ => panic!("Documents directory must exist"),
        };

        assert_eq!(documents.size(), 5120);
        root.add(documents.into_entry());
        assert_eq!(root.size(), 8192 - 1024);
    }

    #[test]
    fn test_remove_missing_child_is_none() {
        let mut root = sample_tree();
        assert_eq!(root.remove("nonexistent"), None);
        assert_eq!(root.size(), 8192);
    }

    #[test]
    fn test_render_is_preorder_with_depth_indent() {
        let root = sample_tree().into_entry();
        let lines = root.render();

        assert_eq!(
            lines,
            vec![
                "📁 Root/",
                "  📁 Documents/",
                "    📄 report.txt (1024 bytes)",
                "    📄 document.pdf (5120 bytes)",
                "  📁 Pictures/",
                "    📄 image.jpg (2048 bytes)",
            ]
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut dir = Directory::new("d");
        dir.add(FsEntry::file("b", 1));
        dir.add(FsEntry::file("a", 2));

        let names: Vec<String> = dir
            .into_entry()
            .render()
            .into_iter()
            .skip(1)
            .collect();
        assert!(names[0].contains('b'));
        assert!(names[1].contains('a'));
    }
}
