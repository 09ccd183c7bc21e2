//! # Document
//!
//! Arena-backed element tree. Freed slots are recycled under a new
//! generation, so a handle kept across a re-render points at nothing rather
//! than at a newer element.

use super::element::{Element, ElementId, ElementKind, Role, ATTR_ITEM_ID};
use crate::todo::models::ItemId;
use anyhow::{anyhow, bail, Result};

/// Identifies an element across re-renders by what it is, not by handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusKey {
    pub role: Role,
    pub item_id: Option<ItemId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Slot>,
    free: Vec<usize>,
    root: ElementId,
    focused: Option<ElementId>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Slot {
                generation: 0,
                element: Some(Element::new(ElementKind::Container, Role::Root)),
            }],
            free: Vec::new(),
            root: ElementId::new(0),
            focused: None,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Add a detached element to the arena
    pub fn create(&mut self, element: Element) -> ElementId {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.nodes[slot];
            entry.element = Some(element);
            return ElementId::with_generation(slot, entry.generation);
        }
        self.nodes.push(Slot {
            generation: 0,
            element: Some(element),
        });
        ElementId::new(self.nodes.len() - 1)
    }

    fn slot(&self, id: ElementId) -> Option<&Slot> {
        self.nodes
            .get(id.slot())
            .filter(|entry| entry.generation == id.generation())
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.slot(id).and_then(|entry| entry.element.as_ref())
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes
            .get_mut(id.slot())
            .filter(|entry| entry.generation == id.generation())
            .and_then(|entry| entry.element.as_mut())
    }

    /// Free the element's slot and invalidate every handle to it
    fn release(&mut self, id: ElementId) -> Option<Element> {
        let entry = self
            .nodes
            .get_mut(id.slot())
            .filter(|entry| entry.generation == id.generation())?;
        let removed = entry.element.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.slot());
        Some(removed)
    }

    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.get(id)
            .ok_or_else(|| anyhow!("Element {:?} is not in the document", id))
    }

    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.get_mut(id)
            .ok_or_else(|| anyhow!("Element {:?} is not in the document", id))
    }

    fn detach_check(&self, parent: ElementId, child: ElementId) -> Result<()> {
        self.element(parent)?;
        if self.element(child)?.parent.is_some() {
            bail!("Element {:?} already has a parent", child);
        }
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            bail!("Element {:?} cannot be placed inside itself", child);
        }
        Ok(())
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.detach_check(parent, child)?;
        self.element_mut(child)?.parent = Some(parent);
        self.element_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Insert `child` in front of the parent's existing children
    pub fn prepend_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.detach_check(parent, child)?;
        self.element_mut(child)?.parent = Some(parent);
        self.element_mut(parent)?.children.insert(0, child);
        Ok(())
    }

    /// Drop every descendant of `parent` from the document
    pub fn remove_children(&mut self, parent: ElementId) -> Result<()> {
        let children = std::mem::take(&mut self.element_mut(parent)?.children);
        let mut pending = children;
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.release(id) {
                pending.extend(removed.children);
            }
            if self.focused == Some(id) {
                self.focused = None;
            }
        }
        Ok(())
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(Element::children).unwrap_or(&[])
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.get(id).and_then(Element::parent), move |current| {
            self.get(*current).and_then(Element::parent)
        })
    }

    /// `id` itself or its nearest ancestor with the given role
    pub fn closest(&self, id: ElementId, role: Role) -> Option<ElementId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|candidate| self.get(*candidate).is_some_and(|el| el.role() == role))
    }

    /// First direct child of `parent` with the given role
    pub fn child_with_role(&self, parent: ElementId, role: Role) -> Option<ElementId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.get(*child).is_some_and(|el| el.role() == role))
    }

    /// Stable id of the item an element belongs to
    pub fn item_id_of(&self, id: ElementId) -> Option<ItemId> {
        let container = self.closest(id, Role::Item)?;
        self.get(container)?
            .attribute(ATTR_ITEM_ID)
            .and_then(ItemId::parse)
    }

    /// All attached elements in tree order, root first
    pub fn walk(&self) -> Vec<ElementId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Attached, and neither it nor any ancestor is hidden
    pub fn is_displayed(&self, id: ElementId) -> bool {
        let Some(element) = self.get(id) else {
            return false;
        };
        if element.is_hidden() {
            return false;
        }
        let mut last = id;
        for ancestor in self.ancestors(id) {
            if self.get(ancestor).is_some_and(Element::is_hidden) {
                return false;
            }
            last = ancestor;
        }
        last == self.root
    }

    /// Displayed interactive elements in tree order
    pub fn focusable(&self) -> Vec<ElementId> {
        self.walk()
            .into_iter()
            .filter(|id| {
                self.get(*id).is_some_and(|el| el.kind().is_interactive()) && self.is_displayed(*id)
            })
            .collect()
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn focus(&mut self, id: ElementId) -> Result<()> {
        self.element(id)?;
        self.focused = Some(id);
        Ok(())
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focus_key(&self, id: ElementId) -> Option<FocusKey> {
        let element = self.get(id)?;
        Some(FocusKey {
            role: element.role(),
            item_id: self.item_id_of(id),
        })
    }

    /// Displayed element matching a focus key
    pub fn find_by_key(&self, key: FocusKey) -> Option<ElementId> {
        self.walk().into_iter().find(|id| {
            self.get(*id).is_some_and(|el| el.role() == key.role)
                && self.item_id_of(*id) == key.item_id
                && self.is_displayed(*id)
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
