use annotation_core::render::NavigateFn;
use annotation_core::{Marker, MarkerId, Renderer};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::actions::AnnotationActions;
use crate::utils::{extract_error, format_time, marker_style};

pub const LAYER_CLASS: &str = "vjs-annotations";
pub const MARKER_CLASS: &str = "annotation";
pub const ACTIVE_CLASS: &str = "active";

const PROGRESS_HOLDER: &str = ".vjs-progress-holder";
const CONTROL_BAR: &str = ".vjs-control-bar";

/// [`Renderer`] writing into the DOM of one player.
pub struct DomRenderer {
    root: Element,
    document: Option<Document>,
    layer: Option<Element>,
    markers: Vec<(MarkerId, Element)>,
    next_id: usize,
}

impl DomRenderer {
    pub fn new(root: Element) -> Self {
        let document = root.owner_document();
        let layer = document
            .as_ref()
            .and_then(|doc| create_element(doc, "div", LAYER_CLASS));

        Self {
            root,
            document,
            layer,
            markers: Vec::new(),
            next_id: 0,
        }
    }
}

impl Renderer for DomRenderer {
    fn attach_layer(&mut self) -> bool {
        let Some(layer) = &self.layer else {
            return false;
        };
        match self.root.query_selector(PROGRESS_HOLDER) {
            Ok(Some(holder)) => match holder.append_child(layer) {
                Ok(_) => true,
                Err(err) => {
                    log::warn!("Failed to attach annotation layer: {}", extract_error(err));
                    false
                }
            },
            _ => false,
        }
    }

    fn attach_actions(&mut self, navigate: NavigateFn) {
        let control_bar = match self.root.query_selector(CONTROL_BAR) {
            Ok(Some(bar)) => bar,
            _ => {
                log::warn!("No control bar, annotation buttons not shown");
                return;
            }
        };
        let Ok(parent) = control_bar.dyn_into::<HtmlElement>() else {
            return;
        };

        // The buttons live as long as the player does.
        leptos::mount::mount_to(parent, move || view! { <AnnotationActions navigate /> }).forget();
    }

    fn add_marker(&mut self, marker: &Marker) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;

        let (Some(document), Some(layer)) = (&self.document, &self.layer) else {
            return id;
        };
        let Some(el) = create_element(document, "span", MARKER_CLASS) else {
            return id;
        };

        let style = marker_style(&marker.geometry.left_style(), &marker.geometry.width_style());
        let attributes = [
            ("style", style),
            ("data-start", format_time(marker.start)),
            ("data-end", format_time(marker.end)),
            ("data-term", marker.term.clone()),
            ("data-index", marker.term_index.to_string()),
        ];
        for (name, value) in &attributes {
            if let Err(err) = el.set_attribute(name, value) {
                log::warn!("Failed to set {name} on marker: {}", extract_error(err));
            }
        }

        match layer.append_child(&el) {
            Ok(_) => self.markers.push((id, el)),
            Err(err) => log::warn!("Failed to append marker: {}", extract_error(err)),
        }
        id
    }

    fn markers_matching(&self, start: f64, term: &str) -> Vec<MarkerId> {
        let start = format_time(start);
        self.markers
            .iter()
            .filter(|(_, el)| {
                el.get_attribute("data-start").as_deref() == Some(start.as_str())
                    && el.get_attribute("data-term").as_deref() == Some(term)
            })
            .map(|(id, _)| *id)
            .collect()
    }

    fn active_markers(&self) -> Vec<MarkerId> {
        self.markers
            .iter()
            .filter(|(_, el)| el.class_list().contains(ACTIVE_CLASS))
            .map(|(id, _)| *id)
            .collect()
    }

    fn set_active(&mut self, id: MarkerId, active: bool) {
        let Some((_, el)) = self.markers.iter().find(|(marker, _)| *marker == id) else {
            return;
        };
        let classes = el.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(err) = result {
            log::warn!("Failed to toggle active marker: {}", extract_error(err));
        }
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        if let Some(layer) = &self.layer {
            layer.set_inner_html("");
        }
    }
}

fn create_element(document: &Document, tag: &str, class: &str) -> Option<Element> {
    match document.create_element(tag) {
        Ok(el) => {
            el.set_class_name(class);
            Some(el)
        }
        Err(err) => {
            log::error!("Failed to create <{tag}>: {}", extract_error(err));
            None
        }
    }
}
