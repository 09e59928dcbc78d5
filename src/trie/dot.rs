use super::probability::{ProbabilityNode, ProbabilityTrie};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


impl ProbabilityNode {
    fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        let label = if id == 0 {
            format!("root\\nn = {}", self.count)
        } else {
            format!(
                "{key}\\nn = {n}\\np = {p:.3}",
                key = self.key.replace('"', "\\\""),
                n = self.count,
                p = self.probability,
            )
        };
        let shape = if self.children.is_empty() { "box" } else { "ellipse" };
        let mut info = vec![
            format!("\tnode_{id} [ label = \"{label}\", shape = {shape} ];\n")
        ];

        let mut next_id = id + 1;
        for child in &self.children {
            let child_id = next_id;
            let (mut child_info, ret_id) = child.to_dot_info(child_id);
            info.append(&mut child_info);
            info.push(format!("\tnode_{id} -- node_{child_id};\n"));
            next_id = ret_id;
        }
        (info, next_id)
    }
}


impl ProbabilityTrie {
    /// Render `self` in the Graphviz `dot` language.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph ProbabilityTrie {\n");
        self.root.to_dot_info(0).0
            .into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push_str("}\n");
        dot
    }


    /// Write `self` to `path` in the Graphviz `dot` language.
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }
}
