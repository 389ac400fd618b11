use std::cell::Cell;
use std::rc::Rc;

use crate::core::DisplayContext;

/// Named rectangular region of the page that hosts one demo
#[derive(Debug)]
pub struct Element {
    id: String,
    offset: Cell<(u32, u32)>,
    size: Cell<DisplayContext>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            offset: Cell::new((0, 0)),
            size: Cell::new(DisplayContext::new(0, 0)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current client size in physical pixels
    pub fn client_size(&self) -> DisplayContext {
        self.size.get()
    }

    pub fn set_client_size(&self, width: u32, height: u32) {
        self.size.set(DisplayContext::new(width, height));
    }

    /// Top-left corner within the page
    pub fn offset(&self) -> (u32, u32) {
        self.offset.get()
    }

    pub fn set_offset(&self, x: u32, y: u32) {
        self.offset.set((x, y));
    }
}

/// The page: container elements in registration order
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Rc<Element>>,
    size: DisplayContext,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container; an existing id is returned unchanged
    pub fn create_element(&mut self, id: &str) -> Rc<Element> {
        if let Some(existing) = self.get_element_by_id(id) {
            return existing;
        }
        let element = Rc::new(Element::new(id));
        self.elements.push(Rc::clone(&element));
        element
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<Rc<Element>> {
        self.elements.iter().find(|e| e.id() == id).cloned()
    }

    pub fn elements(&self) -> &[Rc<Element>] {
        &self.elements
    }

    pub fn size(&self) -> DisplayContext {
        self.size
    }

    /// Tile elements left to right across the page
    ///
    /// Each element gets the full height and an equal share of the width;
    /// the last element absorbs the remainder.
    pub fn layout(&mut self, width: u32, height: u32) {
        self.size = DisplayContext::new(width, height);
        let count = self.elements.len() as u32;
        if count == 0 {
            return;
        }

        let column = width / count;
        for (i, element) in self.elements.iter().enumerate() {
            let i = i as u32;
            let x = i * column;
            let w = if i + 1 == count { width - x } else { column };
            element.set_offset(x, 0);
            element.set_client_size(w, height);
        }

        log::debug!("layout {}x{}: {} columns of {}px", width, height, count, column);
    }

    /// Copy each element's pixels into an RGBA page buffer
    ///
    /// Sources larger than the page are clipped.
    pub fn compose<'a, I>(&self, background: [u8; 4], sources: I) -> Vec<u8>
    where
        I: IntoIterator<Item = (&'a Element, &'a [u8], DisplayContext)>,
    {
        let page = self.size;
        let mut out: Vec<u8> = background.repeat(page.pixel_count());

        for (element, pixels, ctx) in sources {
            let (ox, oy) = element.offset();
            if ox >= page.width || oy >= page.height {
                continue;
            }

            let copy_w = ctx.width.min(page.width - ox) as usize;
            let copy_h = ctx.height.min(page.height - oy);
            for row in 0..copy_h {
                let src = (row * ctx.width) as usize * 4;
                let dst = (((oy + row) * page.width + ox) as usize) * 4;
                out[dst..dst + copy_w * 4].copy_from_slice(&pixels[src..src + copy_w * 4]);
            }
        }

        out
    }
}
