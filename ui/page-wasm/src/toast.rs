//! Toast notifications.
//!
//! `NotificationService` builds toasts and hands them to a `ToastSurface`.
//! In the browser the surface is `DomToastSurface`, which owns (or lazily
//! creates) the fixed-position container and removes each toast once its
//! hide transition has finished.

use crate::bootstrap;
use crate::config;
use crate::dom;
use crate::error::PageError;
use std::cell::RefCell;
use web_sys::Element;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Unknown tags are treated as `Info`.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "error" => Severity::Error,
            "success" => Severity::Success,
            _ => Severity::Info,
        }
    }

    /// Background utility class. Only errors get their own colour.
    pub fn background_class(self) -> &'static str {
        match self {
            Severity::Error => "bg-danger",
            Severity::Info | Severity::Success => "bg-primary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Toast {
            message: message.into(),
            severity,
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "toast align-items-center text-white {} border-0",
            self.severity.background_class()
        )
    }
}

/// Where toasts are displayed.
pub trait ToastSurface {
    type Handle;

    fn mount(&self, toast: &Toast) -> Result<Self::Handle, PageError>;
}

pub struct NotificationService<S> {
    surface: S,
}

impl<S: ToastSurface> NotificationService<S> {
    pub fn new(surface: S) -> Self {
        NotificationService { surface }
    }

    pub fn notify(&self, message: &str, severity: Severity) -> Result<S::Handle, PageError> {
        self.surface.mount(&Toast::new(message, severity))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// ── DOM surface ──

pub struct DomToastSurface {
    container_id: String,
    container: RefCell<Option<Element>>,
}

impl DomToastSurface {
    /// Find or create `#<container_id>` on first use.
    pub fn new(container_id: impl Into<String>) -> Self {
        DomToastSurface {
            container_id: container_id.into(),
            container: RefCell::new(None),
        }
    }

    fn container(&self) -> Result<Element, PageError> {
        if let Some(el) = self.container.borrow().as_ref() {
            if el.is_connected() {
                return Ok(el.clone());
            }
        }
        let el = match dom::by_id(&self.container_id) {
            Some(el) => el,
            None => {
                let el = dom::create_element("div")?;
                el.set_id(&self.container_id);
                el.set_class_name("toast-container position-fixed top-0 end-0 p-3");
                dom::set_style(&el, "z-index", "1055");
                dom::body()?.append_child(&el)?;
                el
            }
        };
        *self.container.borrow_mut() = Some(el.clone());
        Ok(el)
    }
}

impl ToastSurface for DomToastSurface {
    type Handle = Element;

    fn mount(&self, toast: &Toast) -> Result<Element, PageError> {
        let container = self.container()?;

        let el = dom::create_element("div")?;
        el.set_class_name(&toast.class_name());
        el.set_attribute("role", "alert")?;
        el.set_attribute("aria-live", "assertive")?;
        el.set_attribute("aria-atomic", "true")?;

        let row = dom::create_element("div")?;
        row.set_class_name("d-flex");
        let body = dom::create_element("div")?;
        body.set_class_name("toast-body");
        body.set_text_content(Some(&toast.message));
        let close = dom::create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close btn-close-white me-2 m-auto");
        close.set_attribute("data-bs-dismiss", "toast")?;
        close.set_attribute("aria-label", "Close")?;
        row.append_child(&body)?;
        row.append_child(&close)?;
        el.append_child(&row)?;

        container.append_child(&el)?;

        let hidden = el.clone();
        dom::listen_once(&el, "hidden.bs.toast", move |_: web_sys::Event| {
            hidden.remove();
        })?;

        match bootstrap::Toast::new(&el) {
            Ok(widget) => widget.show(),
            Err(e) => {
                el.remove();
                return Err(e.into());
            }
        }
        Ok(el)
    }
}

thread_local! {
    static NOTIFIER: NotificationService<DomToastSurface> =
        NotificationService::new(DomToastSurface::new(config::current().toast_container_id));
}

/// Show a toast in the page's container; failures are logged.
pub fn show(message: &str, severity: Severity) {
    NOTIFIER.with(|n| {
        if let Err(e) = n.notify(message, severity) {
            gloo_console::error!(format!("toast: {e}"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Keeps live toasts in mount order. `dismiss` stands in for the
    /// `hidden.bs.toast` listener `DomToastSurface::mount` attaches, which
    /// needs a document and is not covered here.
    #[derive(Default)]
    struct RecordingSurface {
        next_id: Cell<u32>,
        live: RefCell<Vec<(u32, Toast)>>,
    }

    impl RecordingSurface {
        fn dismiss(&self, id: u32) {
            self.live.borrow_mut().retain(|(i, _)| *i != id);
        }

        fn messages(&self) -> Vec<String> {
            self.live.borrow().iter().map(|(_, t)| t.message.clone()).collect()
        }
    }

    impl ToastSurface for RecordingSurface {
        type Handle = u32;

        fn mount(&self, toast: &Toast) -> Result<u32, PageError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.live.borrow_mut().push((id, toast.clone()));
            Ok(id)
        }
    }

    #[test]
    fn severity_parsing_defaults_to_info() {
        assert_eq!(Severity::parse("error"), Severity::Error);
        assert_eq!(Severity::parse(" ERROR "), Severity::Error);
        assert_eq!(Severity::parse("success"), Severity::Success);
        assert_eq!(Severity::parse("info"), Severity::Info);
        assert_eq!(Severity::parse("warning"), Severity::Info);
        assert_eq!(Severity::parse(""), Severity::Info);
    }

    #[test]
    fn only_errors_get_a_distinct_style() {
        assert_eq!(Severity::Error.background_class(), "bg-danger");
        assert_eq!(Severity::Info.background_class(), Severity::Success.background_class());
        assert_eq!(
            Toast::new("x", Severity::Error).class_name(),
            "toast align-items-center text-white bg-danger border-0"
        );
    }

    #[test]
    fn toasts_stack_in_call_order() {
        let service = NotificationService::new(RecordingSurface::default());
        let a = service.notify("one", Severity::Info).unwrap();
        let b = service.notify("two", Severity::Success).unwrap();
        let c = service.notify("three", Severity::Error).unwrap();

        assert_eq!(service.surface().messages(), vec!["one", "two", "three"]);

        service.surface().dismiss(b);
        assert_eq!(service.surface().messages(), vec!["one", "three"]);
        service.surface().dismiss(c);
        service.surface().dismiss(a);
        assert!(service.surface().messages().is_empty());
    }

    #[test]
    fn severity_is_carried_to_the_surface() {
        let service = NotificationService::new(RecordingSurface::default());
        service.notify("bad", Severity::Error).unwrap();
        let live = service.surface().live.borrow();
        assert_eq!(live[0].1.severity, Severity::Error);
    }
}
