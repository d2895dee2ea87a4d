use crate::domain::model::{Edge, Person, Relationship};
use crate::domain::ports::RelationshipBrowser;

/// 底層模組：決定關係怎麼存（一串平坦的邊）
#[derive(Debug, Default, Clone)]
pub struct Relationships {
    edges: Vec<Edge>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同時寫入 parent -> child 與 child -> parent 兩條邊
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        tracing::debug!("Linking {} as parent of {}", parent.name, child.name);
        self.edges.extend([
            Edge::new(parent, Relationship::Parent, child),
            Edge::new(child, Relationship::Child, parent),
        ]);
    }

    pub fn add_siblings(&mut self, first: &Person, second: &Person) {
        self.edges.extend([
            Edge::new(first, Relationship::Sibling, second),
            Edge::new(second, Relationship::Sibling, first),
        ]);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.subject.name == name && e.relation == Relationship::Parent)
            .map(|e| e.object.name.as_str())
    }
}

/// 高層模組：只認得 [`RelationshipBrowser`]
pub struct Research<'b, B: RelationshipBrowser> {
    browser: &'b B,
}

impl<'b, B: RelationshipBrowser> Research<'b, B> {
    pub fn new(browser: &'b B) -> Self {
        Self { browser }
    }

    pub fn children_of(&self, name: &str) -> Vec<String> {
        self.browser
            .find_all_children_of(name)
            .map(str::to_string)
            .collect()
    }

    /// 每個孩子一行說明文字
    pub fn report(&self, name: &str) -> Vec<String> {
        self.children_of(name)
            .into_iter()
            .map(|child| format!("{} has a child called {}", name, child))
            .collect()
    }
}
