// Composite Pattern: files and directories behind one tree type.
// Callers ask any node for its size without caring which kind it is.

use crate::error::PatternError;
use crate::trace::Trace;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File { name: String, size_kb: u64 },
    Directory { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file(name: impl Into<String>, size_kb: u64) -> Self {
        Node::File {
            name: name.into(),
            size_kb,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    /// Size in KB; directories sum their children recursively.
    pub fn size(&self) -> u64 {
        match self {
            Node::File { size_kb, .. } => *size_kb,
            Node::Directory { children, .. } => children.iter().map(Node::size).sum(),
        }
    }

    pub fn add(&mut self, child: Node) -> Result<(), PatternError> {
        match self {
            Node::Directory { children, .. } => {
                children.push(child);
                Ok(())
            }
            Node::File { name, .. } => Err(PatternError::UnsupportedOperation {
                operation: "add",
                target: format!("file '{}'", name),
            }),
        }
    }

    /// Removes the first direct child called `name`.
    pub fn remove(&mut self, name: &str) -> Result<Option<Node>, PatternError> {
        match self {
            Node::Directory { children, .. } => Ok(children
                .iter()
                .position(|child| child.name() == name)
                .map(|index| children.remove(index))),
            Node::File { name: file, .. } => Err(PatternError::UnsupportedOperation {
                operation: "remove",
                target: format!("file '{}'", file),
            }),
        }
    }

    /// Indented listing, one line per node.
    pub fn list(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.list_into("", &mut lines);
        lines
    }

    fn list_into(&self, indent: &str, lines: &mut Vec<String>) {
        match self {
            Node::File { name, size_kb } => {
                lines.push(format!("{}  - {} ({} KB)", indent, name, size_kb));
            }
            Node::Directory { name, children } => {
                lines.push(format!("{}[{}] ({} KB)", indent, name, self.size()));
                let nested = format!("{}  ", indent);
                for child in children {
                    match child {
                        Node::Directory { .. } => child.list_into(&nested, lines),
                        Node::File { .. } => child.list_into(indent, lines),
                    }
                }
            }
        }
    }
}

fn sample_tree() -> Result<Node, PatternError> {
    let mut documents = Node::directory("documents");
    documents.add(Node::file("report.docx", 120))?;
    documents.add(Node::file("proposal.pdf", 250))?;

    let mut vacation = Node::directory("vacation");
    vacation.add(Node::file("beach.jpg", 3072))?;

    let mut pictures = Node::directory("pictures");
    pictures.add(Node::file("photo1.jpg", 2048))?;
    pictures.add(Node::file("photo2.png", 1536))?;
    pictures.add(vacation)?;

    let mut root = Node::directory("root");
    root.add(documents)?;
    root.add(pictures)?;
    Ok(root)
}

pub fn run_demo(trace: &Trace) -> Result<(), PatternError> {
    trace.banner("Composite Pattern Example");

    let root = sample_tree()?;
    for line in root.list() {
        trace.line(line);
    }

    trace.separator();

    let report = Node::file("report.docx", 120);
    let documents = match &root {
        Node::Directory { children, .. } => children.iter().find(|c| c.name() == "documents"),
        Node::File { .. } => None,
    };

    trace.line(format!("Size of '{}': {} KB", report.name(), report.size()));
    if let Some(documents) = documents {
        trace.line(format!(
            "Total size of '{}' directory: {} KB",
            documents.name(),
            documents.size()
        ));
    }
    trace.line(format!(
        "Total size of '{}' directory: {} KB",
        root.name(),
        root.size()
    ));
    Ok(())
}
