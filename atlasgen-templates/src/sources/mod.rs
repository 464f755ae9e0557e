//! Literal template bodies, grouped by the area of the module they generate.

mod data;
mod gradle;
mod res;
mod test_stub;
mod ui;

pub(crate) use data::{API_INTERFACE, REPOSITORY, RESPONSE_MODEL};
pub(crate) use gradle::BUILD_GRADLE;
pub(crate) use res::{ANDROID_MANIFEST, CONSUMER_RULES, LAYOUT, PROGUARD_RULES, STRINGS};
pub(crate) use test_stub::VIEW_MODEL_TEST;
pub(crate) use ui::{ACTIVITY, VIEW_MODEL};
