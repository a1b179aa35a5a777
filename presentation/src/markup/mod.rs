//! Escaped HTML element tree
//!
//! Markup injected into the page is built as a tree and rendered in one
//! pass. Text nodes and attribute values are escaped at render time, so
//! server-echoed review text can never become markup.

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attr: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element from `tag.class1.class2` shorthand
    pub fn new(name_with_classes: impl ToString) -> Self {
        let full_name = name_with_classes.to_string();
        let mut parts = full_name.split('.');

        let mut element = Element {
            name: parts.next().unwrap_or_default().to_string(),
            attr: vec![],
            children: vec![],
        };

        let classes: Vec<&str> = parts.filter(|c| !c.is_empty()).collect();
        if !classes.is_empty() {
            element.attr.push(("class".to_string(), classes.join(" ")));
        }

        element
    }

    /// Append a text node
    pub fn text(mut self, text: impl ToString) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn attr(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.attr.push((key.to_string(), value.to_string()));
        self
    }

    pub fn class(mut self, class_name: impl ToString) -> Self {
        if let Some(pos) = self.attr.iter().position(|(key, _)| key == "class") {
            let (_, current_class) = &self.attr[pos];
            let new_class = format!("{} {}", current_class, class_name.to_string());
            self.attr[pos] = ("class".to_string(), new_class);
        } else {
            self.attr.push(("class".to_string(), class_name.to_string()));
        }
        self
    }

    pub fn append(self, item: impl CanAppend) -> Self {
        item.append_to(self)
    }

    pub fn render(&self) -> String {
        let mut result = String::new();
        self.render_into(&mut result);
        result
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attr {
            out.push_str(&format!(
                " {}=\"{}\"",
                key,
                html_escape::encode_double_quoted_attribute(value)
            ));
        }
        out.push('>');

        for child in &self.children {
            match child {
                Node::Element(element) => element.render_into(out),
                Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            }
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Render sibling elements back to back
pub fn render_all(elements: &[Element]) -> String {
    let mut result = String::new();
    for element in elements {
        element.render_into(&mut result);
    }
    result
}

pub trait CanAppend {
    fn append_to(self, element: Element) -> Element;
}

impl CanAppend for Element {
    fn append_to(self, mut element: Element) -> Element {
        element.children.push(Node::Element(self));
        element
    }
}

impl<T> CanAppend for T
where
    T: IntoIterator<Item = Element>,
{
    fn append_to(self, mut element: Element) -> Element {
        element
            .children
            .extend(self.into_iter().map(Node::Element));
        element
    }
}
