//! Tree accessors for [`xmltree::Element`].
//!
//! SCPD documents are matched on literal local tag names, compared without
//! regard to ASCII case. Text content is trimmed, and an element whose text
//! is empty after trimming is treated as absent.

use xmltree::Element;

/// Node queries the SCPD parser needs from an XML tree
pub trait ElementExt {
    /// Whether the element's tag name equals `name`, ignoring ASCII case
    fn has_name(&self, name: &str) -> bool;

    /// Child elements in document order, skipping text and comments
    fn child_elements(&self) -> Box<dyn Iterator<Item = &Element> + '_>;

    fn child_element_count(&self) -> usize {
        self.child_elements().count()
    }

    fn child_element_at(&self, index: usize) -> Option<&Element> {
        self.child_elements().nth(index)
    }

    /// First child element named `name`
    fn child_by_name(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|child| child.has_name(name))
    }

    /// Trimmed text content of the first child element named `name`
    fn child_content(&self, name: &str) -> Option<String> {
        let text = self.child_by_name(name)?.get_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn attribute(&self, name: &str) -> Option<&str>;
}

impl ElementExt for Element {
    fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    fn child_elements(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        Box::new(self.children.iter().filter_map(|node| node.as_element()))
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_child_elements_skip_text_and_comments() {
        let root = element("<list>text<!-- note --><a/>more<b/></list>");
        assert_eq!(root.child_element_count(), 2);
        assert_eq!(root.child_element_at(1).unwrap().name, "b");
        assert!(root.child_element_at(2).is_none());
    }

    #[test]
    fn test_child_by_name_ignores_case() {
        let root = element("<scpd><SpecVersion><major>1</major></SpecVersion></scpd>");
        assert!(root.child_by_name("specVersion").is_some());
        assert!(root.has_name("SCPD"));
    }

    #[test]
    fn test_child_content_trims_and_rejects_empty() {
        let root = element("<arg><name>  Volume \n</name><direction></direction><x>   </x></arg>");
        assert_eq!(root.child_content("name").as_deref(), Some("Volume"));
        assert_eq!(root.child_content("direction"), None);
        assert_eq!(root.child_content("x"), None);
        assert_eq!(root.child_content("missing"), None);
    }

    #[test]
    fn test_attribute_lookup() {
        let root = element(r#"<stateVariable sendEvents="yes"/>"#);
        assert_eq!(root.attribute("sendEvents"), Some("yes"));
        assert_eq!(root.attribute("multicast"), None);
    }
}
