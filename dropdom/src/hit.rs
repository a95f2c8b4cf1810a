use crate::element::{Content, Element};
use crate::layout::LayoutResult;

struct Node<'a> {
    element: &'a Element,
    z: i16,
    parent: Option<usize>,
}

fn flatten<'a>(element: &'a Element, z: i16, parent: Option<usize>, out: &mut Vec<Node<'a>>) {
    let z = z.max(element.z_index);
    out.push(Node { element, z, parent });
    let index = out.len() - 1;
    if let Content::Children(children) = &element.content {
        for child in children {
            flatten(child, z, Some(index), out);
        }
    }
}

/// Id of the clickable element under the point, honoring paint order.
///
/// The topmost element at the point wins, exactly as the renderer stacks
/// them: higher z-index first, later tree order on ties. If that element is
/// not itself clickable the hit bubbles up its ancestor chain, so a press on
/// a label lands on the control around it. An overlay therefore shadows
/// whatever it covers, clickable or not.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let mut nodes = Vec::new();
    flatten(root, root.z_index, None, &mut nodes);

    let mut top: Option<usize> = None;
    for (i, node) in nodes.iter().enumerate() {
        let Some(rect) = layout.get(&node.element.id) else {
            continue;
        };
        if !rect.contains(x, y) {
            continue;
        }
        // Later entries paint later, so on equal z the newcomer is on top.
        let covered = matches!(top, Some(t) if nodes[t].z > node.z);
        if !covered {
            top = Some(i);
        }
    }

    let mut current = top;
    while let Some(i) = current {
        if nodes[i].element.clickable {
            return Some(nodes[i].element.id.clone());
        }
        current = nodes[i].parent;
    }
    None
}

/// Whether the point falls inside the laid-out rect of `id`. False when the
/// element is not part of the current frame.
pub fn region_contains(layout: &LayoutResult, id: &str, x: u16, y: u16) -> bool {
    layout.get(id).is_some_and(|rect| rect.contains(x, y))
}
