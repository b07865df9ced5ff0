use std::path::{Path, PathBuf};

use derive_more::Display;
use hashlink::LinkedHashMap;

/// Name under which a directory lists the files placed directly inside it.
pub const DIRECT_FILES_KEY: &str = "";

/// Description of the folders and files to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(LinkedHashMap<String, TreeNode>),
    Files(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("folder")]
    Folder,
    #[display("file")]
    File,
}

/// A single filesystem action produced by walking a [`TreeNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    EnsureFolder(PathBuf),
    CreateFile(PathBuf),
}

impl PlanStep {
    pub fn kind(&self) -> EntryKind {
        match self {
            PlanStep::EnsureFolder(_) => EntryKind::Folder,
            PlanStep::CreateFile(_) => EntryKind::File,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            PlanStep::EnsureFolder(path) | PlanStep::CreateFile(path) => path,
        }
    }
}

impl TreeNode {
    pub fn directory<N, I>(children: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, TreeNode)>,
    {
        TreeNode::Directory(
            children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    pub fn files<N, I>(names: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = N>,
    {
        TreeNode::Files(names.into_iter().map(Into::into).collect())
    }

    /// Flattens the tree rooted at `base` into the ordered steps a
    /// depth-first walk performs. Every folder step precedes the steps for
    /// paths inside it.
    pub fn plan(&self, base: &Path) -> Vec<PlanStep> {
        let mut steps = Vec::new();
        self.collect_steps(base, true, &mut steps);
        steps
    }

    fn collect_steps(&self, base: &Path, is_root: bool, steps: &mut Vec<PlanStep>) {
        let children = match self {
            TreeNode::Files(names) => {
                steps.extend(names.iter().map(|name| PlanStep::CreateFile(base.join(name))));
                return;
            }
            TreeNode::Directory(children) => children,
        };

        for (name, content) in children {
            if name == DIRECT_FILES_KEY {
                // Below the root `base` was already ensured by the parent
                if is_root {
                    steps.push(PlanStep::EnsureFolder(base.to_path_buf()));
                }
                content.collect_steps(base, false, steps);
                continue;
            }

            let child_path = base.join(name);
            steps.push(PlanStep::EnsureFolder(child_path.clone()));
            content.collect_steps(&child_path, false, steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(path: &str) -> PlanStep {
        PlanStep::EnsureFolder(PathBuf::from(path))
    }

    fn file(path: &str) -> PlanStep {
        PlanStep::CreateFile(PathBuf::from(path))
    }

    #[test]
    fn plan_nested_directory_with_files() {
        let tree = TreeNode::directory([(
            "a",
            TreeNode::directory([("b", TreeNode::files(["x.txt"]))]),
        )]);

        let steps = tree.plan(Path::new("/tmp/proj"));

        assert_eq!(
            steps,
            vec![
                folder("/tmp/proj/a"),
                folder("/tmp/proj/a/b"),
                file("/tmp/proj/a/b/x.txt"),
            ]
        );
    }

    #[test]
    fn plan_direct_files_do_not_add_a_folder() {
        let tree = TreeNode::directory([(
            "src",
            TreeNode::directory([(DIRECT_FILES_KEY, TreeNode::files(["App.jsx"]))]),
        )]);

        let steps = tree.plan(Path::new("."));

        assert_eq!(steps, vec![folder("./src"), file("./src/App.jsx")]);
    }

    #[test]
    fn plan_keeps_description_order() {
        let tree = TreeNode::directory([
            ("zeta", TreeNode::files(["b.js", "a.js"])),
            ("alpha", TreeNode::files(Vec::<String>::new())),
            ("mid", TreeNode::directory(Vec::<(String, TreeNode)>::new())),
        ]);

        let steps = tree.plan(Path::new("base"));

        assert_eq!(
            steps,
            vec![
                folder("base/zeta"),
                file("base/zeta/b.js"),
                file("base/zeta/a.js"),
                folder("base/alpha"),
                folder("base/mid"),
            ]
        );
    }

    #[test]
    fn plan_places_every_folder_before_its_contents() {
        let tree = TreeNode::directory([(
            "src",
            TreeNode::directory([
                (
                    "components",
                    TreeNode::directory([
                        ("Layout", TreeNode::files(["Header.jsx"])),
                        ("Menu", TreeNode::files(["MenuItem.jsx"])),
                    ]),
                ),
                ("", TreeNode::files(["App.jsx"])),
            ]),
        )]);

        let steps = tree.plan(Path::new("root"));

        for (index, step) in steps.iter().enumerate() {
            let parent = step.path().parent().expect("step path has a parent");
            if parent == Path::new("root") {
                continue;
            }
            let parent_position = steps
                .iter()
                .position(|s| s.kind() == EntryKind::Folder && s.path() == parent)
                .expect("parent folder is planned");
            assert!(
                parent_position < index,
                "{} planned before its parent",
                step.path().display()
            );
        }
    }

    #[test]
    fn plan_direct_files_at_root_ensure_the_base() {
        let tree = TreeNode::directory([(DIRECT_FILES_KEY, TreeNode::files(["README.md"]))]);

        let steps = tree.plan(Path::new("fresh"));

        assert_eq!(steps, vec![folder("fresh"), file("fresh/README.md")]);
    }

    #[test]
    fn plan_bare_file_list_creates_files_in_base() {
        let tree = TreeNode::files(["one.txt", "two.txt"]);

        let steps = tree.plan(Path::new("out"));

        assert_eq!(steps, vec![file("out/one.txt"), file("out/two.txt")]);
    }

    #[test]
    fn entry_kind_display() {
        assert_eq!(EntryKind::Folder.to_string(), "folder");
        assert_eq!(EntryKind::File.to_string(), "file");
    }
}
