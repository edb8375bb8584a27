use crate::{AccessError, PropertyAccess, Value};

use super::View;

/// [`PropertyAccess`] over a [`View`]: `app_id`, `title` and `role`.
#[derive(Debug)]
pub struct ViewAccess<'v, V: View + ?Sized> {
    view: Option<&'v V>,
}

impl<'v, V: View + ?Sized> ViewAccess<'v, V> {
    /// An access with no view bound; every read fails with
    /// [`AccessError::Unbound`] until [`set_view`](Self::set_view) is called.
    #[must_use]
    pub fn unbound() -> Self {
        Self { view: None }
    }

    #[must_use]
    pub fn new(view: &'v V) -> Self {
        Self { view: Some(view) }
    }

    /// Rebind to another view.
    pub fn set_view(&mut self, view: &'v V) {
        self.view = Some(view);
    }
}

impl<V: View + ?Sized> PropertyAccess for ViewAccess<'_, V> {
    fn get(&self, identifier: &str) -> Result<Value, AccessError> {
        let view = self.view.ok_or(AccessError::Unbound)?;
        match identifier {
            "app_id" => Ok(Value::String(view.app_id())),
            "title" => Ok(Value::String(view.title())),
            "role" => {
                let role = view.role();
                role.as_str()
                    .map(|name| Value::String(name.to_owned()))
                    .ok_or_else(|| AccessError::UnsupportedValue {
                        identifier: identifier.to_owned(),
                        value: role.to_string(),
                    })
            }
            _ => {
                tracing::debug!(identifier, "view has no such property");
                Err(AccessError::UnknownIdentifier {
                    identifier: identifier.to_owned(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MemoryView;
    use crate::view::ViewRole;

    #[test]
    fn reads_app_id_title_role() {
        let view = MemoryView::new("xterm", "shell");
        let access = ViewAccess::new(&view);
        assert_eq!(access.get("app_id"), Ok(Value::from("xterm")));
        assert_eq!(access.get("title"), Ok(Value::from("shell")));
        assert_eq!(access.get("role"), Ok(Value::from("TOPLEVEL")));
    }

    #[test]
    fn unknown_identifier() {
        let view = MemoryView::new("xterm", "shell");
        let access = ViewAccess::new(&view);
        assert_eq!(
            access.get("geometry"),
            Err(AccessError::UnknownIdentifier {
                identifier: "geometry".into()
            })
        );
    }

    #[test]
    fn unsupported_role_is_access_error() {
        let view = MemoryView::new("xterm", "shell").with_role(ViewRole::Other("popup".into()));
        let access = ViewAccess::new(&view);
        assert_eq!(
            access.get("role"),
            Err(AccessError::UnsupportedValue {
                identifier: "role".into(),
                value: "popup".into()
            })
        );
    }

    #[test]
    fn unbound_then_rebound() {
        let first = MemoryView::new("a", "A");
        let second = MemoryView::new("b", "B");
        let mut access = ViewAccess::unbound();
        assert_eq!(access.get("app_id"), Err(AccessError::Unbound));

        access.set_view(&first);
        assert_eq!(access.get("app_id"), Ok(Value::from("a")));
        access.set_view(&second);
        assert_eq!(access.get("app_id"), Ok(Value::from("b")));
    }
}
