//! Plugins shipped with stylescan

mod forms;
mod typography;

pub use forms::FormsPlugin;
pub use typography::TypographyPlugin;

use crate::StylePlugin;

/// Create every built-in plugin, in registration order
pub fn builtin_plugins() -> Vec<Box<dyn StylePlugin>> {
    vec![
        Box::new(FormsPlugin::new()),
        Box::new(TypographyPlugin::new()),
    ]
}
