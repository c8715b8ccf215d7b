// DOM selectors and class names the browser surface relies on.

/// Global the page script defines before loading the wasm bundle.
pub const CONFIG_GLOBAL: &str = "VALENTINE_CONFIG";

pub const PANEL_SELECTOR: &str = ".question-section";
pub const DECORATION_CONTAINER_SELECTOR: &str = ".floating-elements";

pub const HIDDEN_CLASS: &str = "hidden";
pub const DECORATION_CLASS: &str = "floating";
