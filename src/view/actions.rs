use crate::{ActionError, ActionExecutor, Value};

use super::{Size, SnapSlot, View};

/// Lowest opacity `set(alpha, ..)` will apply.
pub const MIN_ALPHA: f32 = 0.1;
/// Highest opacity `set(alpha, ..)` will apply.
pub const MAX_ALPHA: f32 = 1.0;
/// Smallest width `resize` and `set(geometry, ..)` will apply.
pub const MIN_WIDTH: i32 = 40;
/// Smallest height `resize` and `set(geometry, ..)` will apply.
pub const MIN_HEIGHT: i32 = 30;

/// [`ActionExecutor`] that turns rule actions into [`View`] requests.
///
/// | action | arguments |
/// |---|---|
/// | `set` | `alpha, <float or double>` or `geometry, <x>, <y>, <w>, <h>` |
/// | `maximize` / `unmaximize` | none |
/// | `minimize` / `unminimize` | none |
/// | `snap` | one of the [`SnapSlot`] names |
/// | `move` | `<x>, <y>` |
/// | `resize` | `<width>, <height>` |
///
/// Positions and sizes are clamped to the view's container; opacity is
/// clamped to `[MIN_ALPHA, MAX_ALPHA]`.
#[derive(Debug)]
pub struct ViewActions<'v, V: View + ?Sized> {
    view: Option<&'v V>,
}

impl<'v, V: View + ?Sized> ViewActions<'v, V> {
    /// An executor with no view bound; every action fails with
    /// [`ActionError::Unbound`].
    #[must_use]
    pub fn unbound() -> Self {
        Self { view: None }
    }

    #[must_use]
    pub fn new(view: &'v V) -> Self {
        Self { view: Some(view) }
    }

    pub fn set_view(&mut self, view: &'v V) {
        self.view = Some(view);
    }
}

impl<V: View + ?Sized> ActionExecutor for ViewActions<'_, V> {
    fn execute(&mut self, name: &str, arguments: &[Value]) -> Result<(), ActionError> {
        let view = self.view.ok_or(ActionError::Unbound)?;
        match name {
            "set" => set(view, arguments),
            "maximize" | "unmaximize" => {
                arity(name, arguments, 0)?;
                if !view.supports_maximize() {
                    return Err(ActionError::StateUnsupported {
                        action: name.to_owned(),
                    });
                }
                view.set_maximized(name == "maximize");
                Ok(())
            }
            "minimize" | "unminimize" => {
                arity(name, arguments, 0)?;
                if !view.supports_minimize() {
                    return Err(ActionError::StateUnsupported {
                        action: name.to_owned(),
                    });
                }
                view.set_minimized(name == "minimize");
                Ok(())
            }
            "snap" => {
                arity(name, arguments, 1)?;
                let slot: SnapSlot = string_arg(name, arguments, 0)?.parse()?;
                container(view, name)?;
                tracing::debug!(%slot, "snap requested");
                view.request_snap(slot);
                Ok(())
            }
            "move" => {
                arity(name, arguments, 2)?;
                let x = int_arg(name, arguments, 0)?;
                let y = int_arg(name, arguments, 1)?;
                move_view(view, name, x, y)
            }
            "resize" => {
                arity(name, arguments, 2)?;
                let width = int_arg(name, arguments, 0)?;
                let height = int_arg(name, arguments, 1)?;
                resize_view(view, name, width, height)
            }
            _ => Err(ActionError::UnsupportedAction {
                name: name.to_owned(),
            }),
        }
    }
}

fn set<V: View + ?Sized>(view: &V, arguments: &[Value]) -> Result<(), ActionError> {
    if arguments.is_empty() {
        return Err(ActionError::Arity {
            action: "set".to_owned(),
            expected: 2,
            found: 0,
        });
    }
    match string_arg("set", arguments, 0)? {
        "alpha" => {
            arity("set alpha", arguments, 2)?;
            #[allow(clippy::cast_possible_truncation)]
            let requested = match &arguments[1] {
                Value::Float(v) => *v,
                Value::Double(v) => *v as f32,
                other => {
                    return Err(ActionError::ArgumentType {
                        action: "set alpha".to_owned(),
                        position: 1,
                        expected: "float",
                        found: other.type_name(),
                    })
                }
            };
            let alpha = requested.clamp(MIN_ALPHA, MAX_ALPHA);
            if (view.alpha() - alpha).abs() > f32::EPSILON {
                tracing::debug!(alpha, "view alpha set");
                view.set_alpha(alpha);
            }
            Ok(())
        }
        "geometry" => {
            const ACTION: &str = "set geometry";
            arity(ACTION, arguments, 5)?;
            let x = int_arg(ACTION, arguments, 1)?;
            let y = int_arg(ACTION, arguments, 2)?;
            let width = int_arg(ACTION, arguments, 3)?;
            let height = int_arg(ACTION, arguments, 4)?;
            resize_view(view, ACTION, width, height)?;
            move_view(view, ACTION, x, y)
        }
        property => Err(ActionError::UnsupportedProperty {
            property: property.to_owned(),
        }),
    }
}

fn move_view<V: View + ?Sized>(view: &V, action: &str, x: i32, y: i32) -> Result<(), ActionError> {
    let bounds = container(view, action)?;
    let x = x.clamp(0, (bounds.width - MIN_WIDTH).max(0));
    let y = y.clamp(0, (bounds.height - MIN_HEIGHT).max(0));
    view.move_to(x, y);
    Ok(())
}

fn resize_view<V: View + ?Sized>(
    view: &V,
    action: &str,
    width: i32,
    height: i32,
) -> Result<(), ActionError> {
    let bounds = container(view, action)?;
    let width = width.clamp(MIN_WIDTH, bounds.width.max(MIN_WIDTH));
    let height = height.clamp(MIN_HEIGHT, bounds.height.max(MIN_HEIGHT));
    view.resize_to(width, height);
    Ok(())
}

fn container<V: View + ?Sized>(view: &V, action: &str) -> Result<Size, ActionError> {
    view.container_size().ok_or_else(|| ActionError::NoContainer {
        action: action.to_owned(),
    })
}

fn arity(action: &str, arguments: &[Value], expected: usize) -> Result<(), ActionError> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(ActionError::Arity {
            action: action.to_owned(),
            expected,
            found: arguments.len(),
        })
    }
}

fn string_arg<'a>(
    action: &str,
    arguments: &'a [Value],
    position: usize,
) -> Result<&'a str, ActionError> {
    let value = &arguments[position];
    value.as_str().ok_or_else(|| ActionError::ArgumentType {
        action: action.to_owned(),
        position,
        expected: "string",
        found: value.type_name(),
    })
}

/// Integer argument, saturated into `i32`.
fn int_arg(action: &str, arguments: &[Value], position: usize) -> Result<i32, ActionError> {
    let value = &arguments[position];
    let raw = value.as_int().ok_or_else(|| ActionError::ArgumentType {
        action: action.to_owned(),
        position,
        expected: "int",
        found: value.type_name(),
    })?;
    Ok(i32::try_from(raw).unwrap_or(if raw < 0 { i32::MIN } else { i32::MAX }))
}
