// Scroll-reveal targets and the class they receive.

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll, .stagger-children, .metric-item";
pub const VISIBLE_CLASS: &str = "visible";
pub const METRIC_ITEM_CLASS: &str = "metric-item";
pub const METRIC_VALUE_SELECTOR: &str = ".metric-value";
