//! Capability probes.
//!
//! A probe is a named measurement of the client (viewport width, pixel
//! ratio, touch support...). Probes are evaluated lazily, memoized for the
//! session, and may read other probes through their [`ProbeScope`]:
//!
//! ```
//! use browsermap::probe::{ProbeRegistry, ProbeValue};
//! use browsermap::emulation::{DeviceRegistry, EmulatedEnvironment};
//!
//! let device = DeviceRegistry::get_by_title("iPhone 12 Pro").unwrap();
//! let env = EmulatedEnvironment::builder(device).url("http://x.com/index.html").build();
//!
//! let mut probes = ProbeRegistry::new();
//! probes.add("narrow", |scope| (scope.number("clientWidth") < 480.0).into()).unwrap();
//! probes.add("clientWidth", |scope| scope.env().display().client_width.into()).unwrap();
//! assert_eq!(probes.probe("narrow", &env), Some(ProbeValue::Bool(true)));
//! ```

pub mod defaults;
mod registry;
mod value;

pub use registry::{ProbeFn, ProbeRegistry, ProbeScope};
pub use value::ProbeValue;
