// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! The page surface the tour observes: a flat, insertion-ordered collection
//! of addressable elements with screen regions and inline styles.
//!
//! This is the host side of the overlay contract. The overlay engine saves
//! an element's `inline_style` before spotlighting it and must restore it
//! byte-for-byte on teardown.

use std::fmt;

use smol_str::SmolStr;

/// A rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Bounding-box containment check used for overlay hit-testing.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Stable handle to an element within one [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementKey(usize);

/// One addressable widget on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    tag: SmolStr,
    id: Option<SmolStr>,
    classes: Vec<SmolStr>,
    region: Region,
    inline_style: Option<String>,
}

impl PageElement {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            region: Region::default(),
            inline_style: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SmolStr>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[SmolStr] {
        &self.classes
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn inline_style(&self) -> Option<&str> {
        self.inline_style.as_deref()
    }

    pub fn set_inline_style(&mut self, inline_style: Option<String>) {
        self.inline_style = inline_style;
    }
}

/// Element query: `#id`, `.class`, or a bare tag name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Selector {
    Id(SmolStr),
    Class(SmolStr),
    Tag(SmolStr),
}

impl Selector {
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        let raw = raw.trim();
        if let Some(id) = raw.strip_prefix('#') {
            if id.is_empty() {
                return Err(SelectorError::Empty { raw: raw.to_owned() });
            }
            return Ok(Self::Id(SmolStr::new(id)));
        }
        if let Some(class) = raw.strip_prefix('.') {
            if class.is_empty() {
                return Err(SelectorError::Empty { raw: raw.to_owned() });
            }
            return Ok(Self::Class(SmolStr::new(class)));
        }
        if raw.is_empty() {
            return Err(SelectorError::Empty { raw: raw.to_owned() });
        }
        Ok(Self::Tag(SmolStr::new(raw)))
    }

    pub fn matches(&self, element: &PageElement) -> bool {
        match self {
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Class(class) => element.classes().iter().any(|c| c == class),
            Self::Tag(tag) => element.tag() == tag.as_str(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    Empty { raw: String },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { raw } => write!(f, "empty selector: {raw:?}"),
        }
    }
}

impl std::error::Error for SelectorError {}

/// Insertion-ordered element collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    elements: Vec<PageElement>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: PageElement) -> ElementKey {
        self.elements.push(element);
        ElementKey(self.elements.len() - 1)
    }

    pub fn element(&self, key: ElementKey) -> Option<&PageElement> {
        self.elements.get(key.0)
    }

    pub fn element_mut(&mut self, key: ElementKey) -> Option<&mut PageElement> {
        self.elements.get_mut(key.0)
    }

    /// All elements matching `selector`, in insertion order. Zero matches is
    /// not an error.
    pub fn select(&self, selector: &Selector) -> Vec<ElementKey> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| selector.matches(element))
            .map(|(idx, _)| ElementKey(idx))
            .collect()
    }

    /// First element matching `selector`, if any.
    pub fn select_first(&self, selector: &Selector) -> Option<ElementKey> {
        self.select(selector).into_iter().next()
    }

    pub fn keys(&self) -> impl Iterator<Item = ElementKey> + '_ {
        (0..self.elements.len()).map(ElementKey)
    }
}
