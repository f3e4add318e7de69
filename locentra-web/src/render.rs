//! Translation from the core [`Fragment`] description into Yew virtual DOM.

use locentra_footer::{Element, Fragment, Node};
use yew::virtual_dom::{VNode, VTag, VText};
use yew::Html;

/// Convert a rendered fragment into `Html`.
#[must_use]
pub fn fragment_to_html(fragment: &Fragment) -> Html {
    element_to_vnode(&fragment.root)
}

fn element_to_vnode(element: &Element) -> VNode {
    let mut tag = VTag::new(element.tag);
    for (name, value) in &element.attributes {
        tag.add_attribute(*name, value.clone());
    }

    // Adjacent text runs collapse into one text node so server output and
    // hydration agree on a single DOM text node.
    let mut pending = String::new();
    for child in &element.children {
        match child {
            Node::Text(text) => pending.push_str(text),
            Node::Element(nested) => {
                if !pending.is_empty() {
                    tag.add_child(VNode::from(VText::new(std::mem::take(&mut pending))));
                }
                tag.add_child(element_to_vnode(nested));
            }
        }
    }
    if !pending.is_empty() {
        tag.add_child(VNode::from(VText::new(pending)));
    }

    VNode::from(tag)
}
