//! Class- and method-level routing metadata lookup.

use crate::descriptor::{ControllerDescriptor, GroupOptions, HttpVerb, MethodDescriptor, RouteOptions};

/// Class-level group metadata, if the controller declares any.
pub fn group_metadata(controller: &ControllerDescriptor) -> Option<&GroupOptions> {
    controller.route.as_ref()
}

/// The HTTP marker of `method` and its options.
///
/// Verbs are tried in `get, post, put, patch, delete` order and the first
/// declared one wins. `None` means the method is not a route.
pub fn method_metadata(method: &MethodDescriptor) -> Option<(HttpVerb, &RouteOptions)> {
    HttpVerb::PRIORITY.iter().find_map(|verb| {
        method
            .markers
            .iter()
            .find(|m| m.verb() == *verb)
            .map(|m| (*verb, m.options()))
    })
}
