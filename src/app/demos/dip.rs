use crate::config::toml_config::FamilyConfig;
use crate::core::relationships::{Relationships, Research};
use crate::core::{Demo, Person, Relationship};
use crate::utils::error::Result;
use std::io::Write;

pub struct DipDemo {
    config: FamilyConfig,
}

impl DipDemo {
    pub fn new(config: FamilyConfig) -> Self {
        Self { config }
    }

    fn build_relationships(&self) -> Relationships {
        let parent = Person::new(self.config.parent.as_str());
        let children: Vec<Person> = self
            .config
            .children
            .iter()
            .map(|name| Person::new(name.as_str()))
            .collect();

        let mut relationships = Relationships::new();
        for child in &children {
            relationships.add_parent_and_child(&parent, child);
        }
        // 每一對孩子都是兄弟姊妹，不只相鄰的兩個
        for (i, first) in children.iter().enumerate() {
            for second in &children[i + 1..] {
                relationships.add_siblings(first, second);
            }
        }
        relationships
    }
}

impl Demo for DipDemo {
    fn name(&self) -> &'static str {
        "dip"
    }

    fn principle(&self) -> &'static str {
        "Dependency inversion"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let relationships = self.build_relationships();
        let name = self.config.query_name();

        // 反例：高層直接翻底層的資料結構，換掉儲存方式就得跟著改
        writeln!(out, "Reading the store directly:")?;
        for edge in relationships.edges() {
            if edge.subject.name == name && edge.relation == Relationship::Parent {
                writeln!(out, "{} has a child called {}", name, edge.object.name)?;
            }
        }

        writeln!(out, "Through RelationshipBrowser:")?;
        let research = Research::new(&relationships);
        let findings = research.report(name);
        if findings.is_empty() {
            writeln!(out, "{} has no recorded children", name)?;
        }
        for line in findings {
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dip_demo_finds_johns_children() {
        let mut out = Vec::new();
        DipDemo::new(FamilyConfig::default()).run(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(
            output,
            "Reading the store directly:\n\
             John has a child called Chris\n\
             John has a child called Matt\n\
             Through RelationshipBrowser:\n\
             John has a child called Chris\n\
             John has a child called Matt\n"
        );
    }

    #[test]
    fn test_every_pair_of_children_are_siblings() {
        let config = FamilyConfig {
            parent: "John".to_string(),
            children: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            query: None,
        };
        let relationships = DipDemo::new(config).build_relationships();

        // 3 組親子各 2 條邊，3 組兄弟姊妹各 2 條邊
        assert_eq!(relationships.len(), 12);
        let is_sibling = |a: &str, b: &str| {
            relationships.edges().iter().any(|e| {
                e.subject.name == a && e.relation == Relationship::Sibling && e.object.name == b
            })
        };
        assert!(is_sibling("A", "B"));
        assert!(is_sibling("B", "C"));
        assert!(is_sibling("A", "C"));
        assert!(is_sibling("C", "A"));
    }

    #[test]
    fn test_dip_demo_query_without_children() {
        let config = FamilyConfig {
            query: Some("Chris".to_string()),
            ..FamilyConfig::default()
        };
        let mut out = Vec::new();
        DipDemo::new(config).run(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with("Chris has no recorded children\n"));
    }
}
