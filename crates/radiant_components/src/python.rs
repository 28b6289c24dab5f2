//! Python bindings for radio groups.
//!
//! Values crossing the boundary are `bool`, `int`, `float` or `str`; option
//! entries may also be dicts with `value`, `label` and optional `disabled` keys.
//! An exception raised by the Python `on_change` callback is re-raised from the
//! `select` call that triggered it.

use crate::radio::{ButtonStyle, OptionEntry, OptionType, RadioGroup, RadioOption};
use crate::{Component, RenderContext};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use parking_lot::Mutex;
use pyo3::types::{PyBool, PyDict, PyFloat, PyList};
use pyo3::IntoPyObjectExt;
use radiant_core::{ConfigProvider, ControlSize, OptionValue, RadiantError};
use std::sync::Arc;
use tracing::debug;

fn to_py_err(err: RadiantError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn extract_value(ob: &Bound<'_, PyAny>) -> PyResult<OptionValue> {
    if ob.is_instance_of::<PyBool>() {
        Ok(OptionValue::Bool(ob.extract()?))
    } else if let Ok(i) = ob.extract::<i64>() {
        Ok(OptionValue::Integer(i))
    } else if ob.is_instance_of::<PyFloat>() {
        Ok(OptionValue::Float(ob.extract()?))
    } else if let Ok(s) = ob.extract::<String>() {
        Ok(OptionValue::String(s))
    } else {
        Err(PyTypeError::new_err(format!(
            "Radio values must be bool, int, float or str, got {}",
            ob.get_type().name()?
        )))
    }
}

fn extract_optional(ob: Option<&Bound<'_, PyAny>>) -> PyResult<Option<OptionValue>> {
    match ob {
        Some(ob) if !ob.is_none() => extract_value(ob).map(Some),
        _ => Ok(None),
    }
}

fn extract_entry(ob: &Bound<'_, PyAny>) -> PyResult<OptionEntry<OptionValue>> {
    let Ok(dict) = ob.downcast::<PyDict>() else {
        return extract_value(ob).map(OptionEntry::Shorthand);
    };

    let value = dict
        .get_item("value")?
        .ok_or_else(|| PyValueError::new_err("Option dict is missing 'value'"))?;
    let value = extract_value(&value)?;
    let label = match dict.get_item("label")? {
        Some(label) => label.str()?.to_string(),
        None => value.to_string(),
    };
    let disabled = match dict.get_item("disabled")? {
        Some(disabled) => disabled.is_truthy()?,
        None => false,
    };
    Ok(RadioOption::new(value, label).with_disabled(disabled).into())
}

fn value_to_py<'py>(py: Python<'py>, value: &OptionValue) -> PyResult<Bound<'py, PyAny>> {
    match value {
        OptionValue::Bool(b) => b.into_bound_py_any(py),
        OptionValue::Integer(i) => i.into_bound_py_any(py),
        OptionValue::Float(fl) => fl.into_bound_py_any(py),
        OptionValue::String(s) => s.into_bound_py_any(py),
    }
}

/// A radio group driven from Python.
#[pyclass(name = "RadioGroup")]
pub struct RadiantRadioGroup {
    inner: RadioGroup<OptionValue>,
    cx: RenderContext,
    /// Exception raised by the last `on_change` call, until `select` re-raises it.
    callback_error: Arc<Mutex<Option<PyErr>>>,
}

#[pymethods]
impl RadiantRadioGroup {
    #[new]
    #[pyo3(signature = (
        options=None,
        value=None,
        default_value=None,
        controlled=None,
        name=None,
        disabled=false,
        option_type="default",
        button_style="outline",
        size=None,
        on_change=None,
        config_json=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        options: Option<&Bound<'_, PyList>>,
        value: Option<&Bound<'_, PyAny>>,
        default_value: Option<&Bound<'_, PyAny>>,
        controlled: Option<bool>,
        name: Option<String>,
        disabled: bool,
        option_type: &str,
        button_style: &str,
        size: Option<&str>,
        on_change: Option<PyObject>,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let value = extract_optional(value)?;
        let controlled = match (controlled, &value) {
            (Some(false), Some(_)) => {
                return Err(PyValueError::new_err(
                    "`value` makes a controlled group; use `default_value` with controlled=False",
                ))
            }
            (Some(controlled), _) => controlled,
            (None, value) => value.is_some(),
        };
        let mut inner = if controlled {
            RadioGroup::controlled(value)
        } else {
            RadioGroup::uncontrolled(extract_optional(default_value)?)
        };

        if let Some(options) = options {
            let entries = options
                .iter()
                .map(|entry| extract_entry(&entry))
                .collect::<PyResult<Vec<_>>>()?;
            inner = inner.with_options(entries);
        }
        if let Some(name) = name {
            inner = inner.with_name(name);
        }
        if let Some(size) = size {
            inner = inner.with_size(size.parse::<ControlSize>().map_err(to_py_err)?);
        }
        inner = inner
            .with_disabled(disabled)
            .with_option_type(option_type.parse::<OptionType>().map_err(to_py_err)?)
            .with_button_style(button_style.parse::<ButtonStyle>().map_err(to_py_err)?);

        let callback_error = Arc::new(Mutex::new(None));
        if let Some(callback) = on_change {
            let slot = Arc::clone(&callback_error);
            inner = inner.on_change(move |event| {
                Python::with_gil(|py| {
                    let result = value_to_py(py, &event.value)
                        .and_then(|value| callback.call1(py, (value,)));
                    if let Err(err) = result {
                        debug!(error = %err, "python on_change callback raised");
                        *slot.lock() = Some(err);
                    }
                });
            });
        }

        let config = match config_json {
            Some(json) => ConfigProvider::from_json(json).map_err(to_py_err)?,
            None => ConfigProvider::default(),
        };

        Ok(Self {
            inner,
            cx: RenderContext::new(config),
            callback_error,
        })
    }

    /// Pick a value as if its radio were clicked; returns whether `on_change` ran.
    ///
    /// Re-raises an exception thrown by `on_change`. The pick itself has
    /// already been applied by then.
    fn select(&self, py: Python<'_>, value: &Bound<'_, PyAny>) -> PyResult<bool> {
        let value = extract_value(value)?;
        // The callback reacquires the GIL itself.
        let notified = py.allow_threads(|| self.inner.select(value));
        match self.callback_error.lock().take() {
            Some(err) => Err(err),
            None => Ok(notified),
        }
    }

    #[getter]
    fn value<'py>(&self, py: Python<'py>) -> PyResult<Option<Bound<'py, PyAny>>> {
        self.inner
            .value()
            .map(|value| value_to_py(py, &value))
            .transpose()
    }

    /// Reflect a new caller-owned value; raises `ValueError` on uncontrolled groups.
    fn set_value(&self, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
        self.inner
            .set_value(extract_optional(value)?)
            .map_err(to_py_err)
    }

    #[getter]
    fn controlled(&self) -> bool {
        self.inner.is_controlled()
    }

    fn render(&self) -> String {
        self.inner.render_html(&self.cx)
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.render(&self.cx).to_json().map_err(to_py_err)
    }
}

/// Register the component classes on a Python module.
pub fn register_components(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RadiantRadioGroup>()?;
    Ok(())
}

#[pymodule]
fn radiant(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_components(m)
}
