use crate::config::ProjectConfig;
use crate::descriptor::{ControllerDescriptor, GroupOptions, MethodDescriptor};
use crate::metadata::{group_metadata, method_metadata};
use crate::naming::{to_kebab_case, to_snake_case};
use crate::params::{build_url, extract};
use crate::router::{
    apply_route_option, join_uri, ControllerAction, RouteHandle, RouteRegistrar, RESERVED_ROUTE_OPTIONS,
};

/// Registration of a single controller inside one router group.
pub(super) struct ControllerRegistration<'a> {
    controller: &'a ControllerDescriptor,
    class_options: Option<&'a GroupOptions>,
    config: &'a ProjectConfig,
    directory_mode: bool,
}

/// Per-controller values every method registration reads.
struct MethodScope<'a> {
    name_prefix: String,
    declared_name: Option<String>,
    custom_prefix: bool,
    class_middleware: Vec<String>,
    controller: &'a str,
    injected_types: &'a [String],
}

impl<'a> ControllerRegistration<'a> {
    pub(super) fn new(controller: &'a ControllerDescriptor, config: &'a ProjectConfig, directory_mode: bool) -> Self {
        Self {
            controller,
            class_options: group_metadata(controller),
            config,
            directory_mode,
        }
    }

    fn class_option(&self, key: &str) -> Option<String> {
        self.class_options.and_then(|o| o.string(key))
    }

    /// Open the controller's group on `router` and register every eligible
    /// method. Returns the number of routes added.
    pub(super) fn register<R: RouteRegistrar>(&self, router: &mut R, prefix: &str, options: &GroupOptions) -> usize {
        let (prefix, custom_prefix) = match self.class_option("prefix") {
            Some(custom) => (custom, true),
            None => (prefix.to_string(), false),
        };
        let prefix = prefix.trim_matches('/').to_string();

        let mut group = GroupOptions::new();
        if !prefix.is_empty() {
            group.insert("prefix", prefix.clone());
        }
        if let Some(class_options) = self.class_options {
            for (key, value) in class_options.iter().filter(|(k, _)| k.as_str() != "prefix") {
                group.insert(key.clone(), value.clone());
            }
        }
        group.merge(options);

        // A declared `name`, even an empty one, replaces path-based naming.
        let declared_name = self.class_option("name");
        let mut name_prefix = if declared_name.is_some() { String::new() } else { prefix };

        if !custom_prefix && self.directory_mode {
            let segment = to_kebab_case(&self.controller.short_name(&self.config.controller_suffix));
            let group_prefix = group.string("prefix").unwrap_or_default();
            group.insert("prefix", format!("{group_prefix}/{segment}"));
            if declared_name.is_none() {
                name_prefix = join_uri(&name_prefix, &segment);
            }
        }

        // Only a non-empty declared name drops the `.` separator; an empty
        // prefix still yields a leading dot.
        let name_prefix = match declared_name.as_deref() {
            Some(declared) if !declared.is_empty() => name_prefix,
            _ => format!("{}.", name_prefix.replace('/', ".")),
        };

        let scope = MethodScope {
            name_prefix,
            declared_name,
            custom_prefix,
            class_middleware: self.class_options.map(|o| o.list("middleware")).unwrap_or_default(),
            controller: &self.controller.name,
            injected_types: &self.config.injected_types,
        };

        let mut count = 0;
        router.group(&group, &mut |r| {
            for method in &self.controller.methods {
                if register_method(r, &scope, method) {
                    count += 1;
                }
            }
        });

        tracing::info!(
            controller = %self.controller.name,
            prefix = %group.string("prefix").unwrap_or_default(),
            routes = count,
            "Controller registered"
        );
        count
    }
}

/// Register one method. Returns `false` when the method is not a route.
fn register_method<R: RouteRegistrar>(router: &mut R, scope: &MethodScope<'_>, method: &MethodDescriptor) -> bool {
    if !method.public {
        tracing::debug!(controller = scope.controller, method = %method.name, "Skipping non-public method");
        return false;
    }
    let Some((verb, options)) = method_metadata(method) else {
        tracing::debug!(controller = scope.controller, method = %method.name, "No HTTP marker, skipping");
        return false;
    };

    let url = match options.string("url") {
        Some(url) => url,
        None if method.name == "index" => String::new(),
        None => {
            let url = build_url(&to_kebab_case(&method.name), &extract(method, scope.injected_types));
            if scope.custom_prefix {
                url
            } else {
                url.trim_matches('/').to_string()
            }
        }
    };

    let mut name = options
        .string("name")
        .unwrap_or_else(|| format!("{}{}", scope.name_prefix, to_snake_case(&method.name)));
    if let Some(declared) = &scope.declared_name {
        name = format!("{declared}{name}");
    }

    let handle = router.add_route(verb, &url, ControllerAction::new(scope.controller, method.name.as_str()));
    handle.name(&name);

    let mut middleware = scope.class_middleware.clone();
    middleware.extend(options.list("middleware"));
    if !middleware.is_empty() {
        handle.middleware(&middleware);
    }

    for (key, value) in options.iter() {
        if RESERVED_ROUTE_OPTIONS.contains(&key.as_str()) {
            continue;
        }
        if !apply_route_option(handle, key, value) {
            tracing::debug!(method = %method.name, option = %key, "Route option not supported, ignored");
        }
    }

    tracing::debug!(verb = %verb, url = %url, name = %name, action = %method.name, "Route added");
    true
}
