//! Navigation, scroll reveal, counters and in-page anchors.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::config::{CounterConfig, SiteConfig};
use crate::counter::Counter;
use crate::error::Result;
use crate::nav::{self, Menu, ACTIVE_CLASS, SCROLLED_CLASS};
use crate::reveal::{METRIC_ITEM_CLASS, METRIC_VALUE_SELECTOR, REVEAL_SELECTOR, VISIBLE_CLASS};

pub(crate) fn select_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn warn_on_err<T>(what: &str, result: std::result::Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{what}: {err:?}");
    }
}

pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    cb.forget();
    Ok(())
}

/// Navbar scroll marker, mobile menu toggle and menu close on link click.
pub fn navigation(window: &Window, document: &Document, cfg: &SiteConfig) -> Result<()> {
    if let Some(navbar) = document.get_element_by_id(cfg.navbar) {
        let threshold = cfg.scroll_threshold;
        let win = window.clone();
        listen(window, "scroll", move |_: Event| {
            let y = win.scroll_y().unwrap_or(0.0);
            let classes = navbar.class_list();
            let result = if nav::is_scrolled(y, threshold) {
                classes.add_1(SCROLLED_CLASS)
            } else {
                classes.remove_1(SCROLLED_CLASS)
            };
            warn_on_err("navbar class", result);
        })?;
    }

    let toggle = document.query_selector(".nav-toggle")?;
    let menu_el = document.query_selector(".nav-menu")?;
    let (Some(toggle), Some(menu_el)) = (toggle, menu_el) else {
        log::debug!("no mobile menu on this page");
        return Ok(());
    };

    let menu = Rc::new(RefCell::new(Menu::default()));
    let sync = {
        let toggle = toggle.clone();
        move |open: bool| {
            warn_on_err("menu class", menu_el.class_list().toggle_with_force(ACTIVE_CLASS, open));
            warn_on_err("toggle class", toggle.class_list().toggle_with_force(ACTIVE_CLASS, open));
        }
    };
    let sync = Rc::new(sync);

    {
        let menu = menu.clone();
        let sync = sync.clone();
        listen(&toggle, "click", move |_: Event| {
            let open = menu.borrow_mut().toggle();
            sync(open);
        })?;
    }

    for link in select_all(document, ".nav-link")? {
        let menu = menu.clone();
        let sync = sync.clone();
        listen(&link, "click", move |_: Event| {
            menu.borrow_mut().close();
            sync(false);
        })?;
    }
    Ok(())
}

/// Marks reveal targets visible once a tenth of them is on screen; metric
/// items also start their counter.
pub fn scroll_reveal(window: &Window, document: &Document, cfg: &SiteConfig) -> Result<()> {
    let targets = select_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let win = window.clone();
    let counter_cfg = cfg.counter.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                warn_on_err("reveal class", target.class_list().add_1(VISIBLE_CLASS));
                if target.class_list().contains(METRIC_ITEM_CLASS) {
                    if let Err(err) = animate_counter(&win, &target, &counter_cfg) {
                        log::warn!("counter: {err}");
                    }
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(())
}

/// Counts the item's `.metric-value` up to its `data-count`, once.
pub fn animate_counter(window: &Window, item: &Element, cfg: &CounterConfig) -> Result<()> {
    let Some(value) = item
        .query_selector(METRIC_VALUE_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let dataset = value.dataset();
    if dataset.get("animated").is_some() {
        return Ok(());
    }
    dataset.set("animated", "true")?;

    let raw = dataset.get("count").unwrap_or_default();
    let start = window.performance().map(|p| p.now()).unwrap_or_default();
    let Some(counter) = Counter::parse(&raw, start, cfg) else {
        log::warn!("metric value has unusable data-count {raw:?}");
        return Ok(());
    };

    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        value.set_text_content(Some(&counter.text(now)));
        if counter.is_done(now) {
            // drop the self-reference so the finished closure can be freed
            f.borrow_mut().take();
            return;
        }
        if let Some(cb) = f.borrow().as_ref() {
            warn_on_err(
                "counter frame",
                win.request_animation_frame(cb.as_ref().unchecked_ref()),
            );
        }
    }));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Smooth-scrolls to the target of every in-page anchor.
pub fn smooth_scroll(document: &Document) -> Result<()> {
    for anchor in select_all(document, r##"a[href^="#"]"##)? {
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            match doc.query_selector(&href) {
                Ok(Some(target)) => {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
                Ok(None) => {}
                Err(_) => log::debug!("anchor {href} is not a valid selector"),
            }
        })?;
    }
    Ok(())
}
