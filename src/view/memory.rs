use std::cell::{Cell, RefCell};

use super::{Size, SnapSlot, View, ViewRole};

/// A request a [`MemoryView`] received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRequest {
    Alpha(f32),
    Move { x: i32, y: i32 },
    Resize { width: i32, height: i32 },
    Maximized(bool),
    Minimized(bool),
    Snap(SnapSlot),
}

/// An in-memory [`View`] that applies requests to its own state and keeps a
/// log of them. Useful for headless hosts and for exercising rules.
#[derive(Debug)]
pub struct MemoryView {
    app_id: String,
    title: String,
    role: ViewRole,
    container: Option<Size>,
    supports_maximize: bool,
    supports_minimize: bool,
    alpha: Cell<f32>,
    position: Cell<(i32, i32)>,
    size: Cell<Size>,
    maximized: Cell<bool>,
    minimized: Cell<bool>,
    requests: RefCell<Vec<ViewRequest>>,
}

impl MemoryView {
    /// A fully opaque toplevel at the origin of a 1920x1080 output.
    #[must_use]
    pub fn new(app_id: &str, title: &str) -> Self {
        Self {
            app_id: app_id.to_owned(),
            title: title.to_owned(),
            role: ViewRole::Toplevel,
            container: Some(Size {
                width: 1920,
                height: 1080,
            }),
            supports_maximize: true,
            supports_minimize: true,
            alpha: Cell::new(1.0),
            position: Cell::new((0, 0)),
            size: Cell::new(Size {
                width: 640,
                height: 480,
            }),
            maximized: Cell::new(false),
            minimized: Cell::new(false),
            requests: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: ViewRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_container(mut self, width: i32, height: i32) -> Self {
        self.container = Some(Size { width, height });
        self
    }

    #[must_use]
    pub fn without_container(mut self) -> Self {
        self.container = None;
        self
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        self.alpha.set(alpha);
        self
    }

    #[must_use]
    pub fn without_maximize(mut self) -> Self {
        self.supports_maximize = false;
        self
    }

    #[must_use]
    pub fn without_minimize(mut self) -> Self {
        self.supports_minimize = false;
        self
    }

    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        self.position.get()
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size.get()
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.maximized.get()
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.minimized.get()
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<ViewRequest> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    fn record(&self, request: ViewRequest) {
        self.requests.borrow_mut().push(request);
    }
}

impl View for MemoryView {
    fn app_id(&self) -> String {
        self.app_id.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn role(&self) -> ViewRole {
        self.role.clone()
    }

    fn alpha(&self) -> f32 {
        self.alpha.get()
    }

    fn set_alpha(&self, alpha: f32) {
        self.alpha.set(alpha);
        self.record(ViewRequest::Alpha(alpha));
    }

    fn container_size(&self) -> Option<Size> {
        self.container
    }

    fn move_to(&self, x: i32, y: i32) {
        self.position.set((x, y));
        self.record(ViewRequest::Move { x, y });
    }

    fn resize_to(&self, width: i32, height: i32) {
        self.size.set(Size { width, height });
        self.record(ViewRequest::Resize { width, height });
    }

    fn set_maximized(&self, maximized: bool) {
        self.maximized.set(maximized);
        self.record(ViewRequest::Maximized(maximized));
    }

    fn set_minimized(&self, minimized: bool) {
        self.minimized.set(minimized);
        self.record(ViewRequest::Minimized(minimized));
    }

    fn request_snap(&self, slot: SnapSlot) {
        self.record(ViewRequest::Snap(slot));
    }

    fn supports_maximize(&self) -> bool {
        self.supports_maximize
    }

    fn supports_minimize(&self) -> bool {
        self.supports_minimize
    }
}
