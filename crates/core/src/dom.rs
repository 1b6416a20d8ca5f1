//! Element handle abstraction and an in-memory page model.
//!
//! The drawer controller only talks to the [`Element`] and [`Document`] traits.
//! [`MemElement`] / [`MemoryDom`] implement them over an `Rc` tree so the
//! controller runs (and is tested) without a browser. Handles behave like DOM
//! handles: cloning is cheap, all clones see the same node, and mutation goes
//! through `&self`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A handle to one element of a page.
pub trait Element: Clone {
    fn id(&self) -> Option<String>;

    /// The element directly following this one under the same parent.
    fn next_element_sibling(&self) -> Option<Self>;

    fn parent_element(&self) -> Option<Self>;

    fn has_class(&self, class: &str) -> bool;

    /// Replace `from` with `to` in the class list, keeping its position.
    /// Returns false (and changes nothing) when `from` is absent.
    fn replace_class(&self, from: &str, to: &str) -> bool;

    fn style_property(&self, name: &str) -> Option<String>;

    fn set_style_property(&self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    /// Current value of an input element (empty for anything else).
    fn value(&self) -> String;

    fn set_value(&self, value: &str);
}

/// Lookup of well-known elements.
pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    value: String,
    text: String,
    parent: Weak<RefCell<Node>>,
    children: Vec<MemElement>,
}

/// Handle to a node of an in-memory page.
#[derive(Clone)]
pub struct MemElement(Rc<RefCell<Node>>);

impl MemElement {
    pub fn new(tag: &str) -> Self {
        MemElement(Rc::new(RefCell::new(Node { tag: tag.to_string(), ..Node::default() })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        {
            let mut node = self.0.borrow_mut();
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_style(self, name: &str, value: &str) -> Self {
        self.set_style_property(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    /// Append `child` as the last child, detaching it from any previous parent.
    /// Returns the child for chaining.
    pub fn append_child(&self, child: MemElement) -> MemElement {
        if let Some(old_parent) = child.parent_element() {
            old_parent.0.borrow_mut().children.retain(|c| !c.ptr_eq(&child));
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        child
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Space-joined class list, as it would appear in a `class` attribute.
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    pub fn children(&self) -> Vec<MemElement> {
        self.0.borrow().children.clone()
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &MemElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Depth-first, document-order search of this subtree.
    pub fn find_by_id(&self, id: &str) -> Option<MemElement> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children().iter().find_map(|c| c.find_by_id(id))
    }
}

impl Element for MemElement {
    fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        let siblings = self.parent_element()?.children();
        let pos = siblings.iter().position(|c| c.ptr_eq(self))?;
        siblings.get(pos + 1).cloned()
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(MemElement)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn replace_class(&self, from: &str, to: &str) -> bool {
        let mut node = self.0.borrow_mut();
        let Some(pos) = node.classes.iter().position(|c| c == from) else {
            return false;
        };
        if from == to {
            return true;
        }
        // Same as classList.replace: a token already present is not duplicated.
        if node.classes.iter().any(|c| c == to) {
            node.classes.remove(pos);
        } else {
            node.classes[pos] = to.to_string();
        }
        true
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.0.borrow().styles.get(name).cloned()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.0.borrow_mut().styles.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }
}

impl PartialEq for MemElement {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for MemElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        write!(f, "<{}", node.tag)?;
        if let Some(id) = &node.id {
            write!(f, " id=\"{id}\"")?;
        }
        if !node.classes.is_empty() {
            write!(f, " class=\"{}\"", node.classes.join(" "))?;
        }
        write!(f, ">")
    }
}

/// A page rooted at a single element.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    root: MemElement,
}

impl MemoryDom {
    pub fn new(root: MemElement) -> Self {
        MemoryDom { root }
    }

    pub fn root(&self) -> &MemElement {
        &self.root
    }
}

impl Document for MemoryDom {
    type Element = MemElement;

    fn element_by_id(&self, id: &str) -> Option<MemElement> {
        self.root.find_by_id(id)
    }
}
