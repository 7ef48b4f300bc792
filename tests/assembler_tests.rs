#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use autoroute::{
    AutoRoute, HttpRouteMarker, HttpVerb, MethodDescriptor, Options, ParameterDescriptor, RouteError, RouteTable,
    RouteTarget,
};
use common::descriptors::{index, show};
use common::project::TestProject;
use serde_json::json;

fn register(auto: &AutoRoute, dir: &std::path::Path, prefix: &str, options: &Options) -> RouteTable {
    let mut table = RouteTable::new();
    auto.register(&mut table, prefix, RouteTarget::Directory(dir), options)
        .unwrap();
    table
}

fn blog() -> TestProject {
    TestProject::new()
        .controller("PostController.rs", |c| c.method(index()).method(show()))
        .controller("Admin/UserController.rs", |c| c.method(index()))
        .controller("AdminController.rs", |c| c.method(index()))
}

#[test]
fn test_default_conventions() {
    let project = TestProject::new().controller("PostController.rs", |c| c.method(show()));
    let table = register(&project.auto(), &project.app(), "/blog", &Options::new());

    assert_eq!(table.len(), 1);
    let route = &table.routes()[0];
    assert_eq!(route.method, HttpVerb::Get);
    assert_eq!(route.uri, "/blog/post/show/{id}");
    assert_eq!(route.name.as_deref(), Some("blog.post.show"));
    assert_eq!(route.controller, "App::PostController");
    assert_eq!(route.action, "show");
}

#[test]
fn test_index_maps_to_group_root() {
    let project = TestProject::new().controller("PostController.rs", |c| c.method(index()));
    let table = register(&project.auto(), &project.app(), "/blog", &Options::new());
    assert_eq!(table.routes()[0].uri, "/blog/post");
    assert_eq!(table.routes()[0].name.as_deref(), Some("blog.post.index"));
}

#[test]
fn test_sub_directories_prefix_url_and_name() {
    let project = TestProject::new().controller("Admin/UserSettingsController.rs", |c| {
        c.method(
            MethodDescriptor::new("resetPassword")
                .param(ParameterDescriptor::new("id"))
                .param(ParameterDescriptor::new("token").optional())
                .verb(HttpVerb::Post),
        )
    });
    let table = register(&project.auto(), &project.app(), "", &Options::new());
    let route = &table.routes()[0];
    assert_eq!(route.uri, "/admin/user-settings/reset-password/{id}/{token?}");
    assert_eq!(route.name.as_deref(), Some("admin.user-settings.reset_password"));
    assert_eq!(route.controller, "App::Admin::UserSettingsController");
}

#[test]
fn test_declared_class_name_is_concatenated() {
    let project = TestProject::new().controller("UserController.rs", |c| {
        c.route(Options::new().with("name", "api_"))
            .method(MethodDescriptor::new("listUsers").verb(HttpVerb::Get))
    });
    let table = register(&project.auto(), &project.app(), "/api", &Options::new());
    let route = &table.routes()[0];
    assert_eq!(route.name.as_deref(), Some("api_list_users"));
    assert_eq!(route.uri, "/api/user/list-users");
}

#[test]
fn test_middleware_accumulates() {
    let project = TestProject::new().controller("PostController.rs", |c| {
        c.route(Options::new().with("middleware", json!(["auth"])))
            .method(
                MethodDescriptor::new("store").marker(HttpRouteMarker::Post(
                    Options::new().with("middleware", "throttle"),
                )),
            )
    });
    let table = register(&project.auto(), &project.app(), "", &Options::new());
    assert_eq!(table.routes()[0].middleware, vec!["auth", "throttle"]);
}

#[test]
fn test_global_options_reach_every_controller() {
    let project = blog();
    let options = Options::new()
        .with("middleware", "web")
        .with("domain", "blog.test");
    let table = register(&project.auto(), &project.app(), "", &options);
    assert_eq!(table.len(), 4);
    for route in table.routes() {
        assert_eq!(route.middleware, vec!["web"]);
        assert_eq!(route.domain.as_deref(), Some("blog.test"));
    }
}

#[test]
fn test_admin_rule_excludes_directory_and_controller() {
    let project = blog();
    let auto = project.auto();
    let mut table = RouteTable::new();
    let registration = auto
        .except(["admin"])
        .register(&mut table, "", RouteTarget::Directory(&project.app()), &Options::new())
        .unwrap();

    assert_eq!(registration.controllers, vec!["App::PostController"]);
    assert_eq!(
        registration.excluded,
        vec!["App::Admin::UserController", "App::AdminController"]
    );
    assert!(table.routes().iter().all(|r| r.controller == "App::PostController"));
}

#[test]
fn test_exclusion_by_file_name_and_relative_path() {
    let project = blog();
    let auto = project.auto();
    for rule in ["PostController.rs", "post", "admin/usercontroller.rs"] {
        let mut table = RouteTable::new();
        let registration = auto
            .except([rule])
            .register(&mut table, "", RouteTarget::Directory(&project.app()), &Options::new())
            .unwrap();
        assert_eq!(registration.excluded.len(), 1, "rule {rule}");
    }
}

#[test]
fn test_exclusions_do_not_leak_into_next_call() {
    let project = blog();
    let auto = project.auto();

    let mut first = RouteTable::new();
    auto.except(["Post"])
        .register(&mut first, "", RouteTarget::Directory(&project.app()), &Options::new())
        .unwrap();
    assert!(first.by_name("post.show").is_none());

    let second = register(&auto, &project.app(), "", &Options::new());
    assert!(second.by_name("post.show").is_some());
}

#[test]
fn test_except_option_replaces_builder_rules() {
    let project = blog();
    let auto = project.auto();
    let mut table = RouteTable::new();
    let registration = auto
        .except(["Post"])
        .register(
            &mut table,
            "",
            RouteTarget::Directory(&project.app()),
            &Options::new().with("except", "Admin"),
        )
        .unwrap();
    assert_eq!(registration.controllers, vec!["App::PostController"]);
}

#[test]
fn test_registration_is_deterministic() {
    let project = blog();
    let auto = project.auto();
    let a = register(&auto, &project.app(), "/blog", &Options::new());
    let b = register(&auto, &project.app(), "/blog", &Options::new());
    assert_eq!(a.routes(), b.routes());
    assert_eq!(
        serde_json::to_string(a.routes()).unwrap(),
        serde_json::to_string(b.routes()).unwrap()
    );
}

#[test]
fn test_custom_class_prefix_replaces_directory_prefix() {
    let project = TestProject::new().controller("Admin/SettingsController.rs", |c| {
        c.route(Options::new().with("prefix", "/control-panel"))
            .method(index())
            .method(show())
    });
    let table = register(&project.auto(), &project.app(), "/blog", &Options::new());
    assert_eq!(table.routes()[0].uri, "/control-panel");
    assert_eq!(table.routes()[1].uri, "/control-panel/show/{id}");
    assert_eq!(table.routes()[1].name.as_deref(), Some("control-panel.show"));
}

#[test]
fn test_custom_prefix_with_declared_name() {
    let project = TestProject::new().controller("Admin/PanelController.rs", |c| {
        c.route(Options::new().with("prefix", "/panel").with("name", "panel_"))
            .method(MethodDescriptor::new("showAll").verb(HttpVerb::Get))
    });
    let table = register(&project.auto(), &project.app(), "", &Options::new());
    assert_eq!(table.len(), 1);
    let route = &table.routes()[0];
    assert_eq!(route.uri, "/panel/show-all");
    assert_eq!(route.name.as_deref(), Some("panel_show_all"));
    assert_eq!(route.controller, "App::Admin::PanelController");
}

#[test]
fn test_empty_declared_name_keeps_leading_dot() {
    let project = TestProject::new().controller("PostController.rs", |c| {
        c.route(Options::new().with("name", "")).method(show())
    });
    let table = register(&project.auto(), &project.app(), "/blog", &Options::new());
    let route = &table.routes()[0];
    assert_eq!(route.uri, "/blog/post/show/{id}");
    assert_eq!(route.name.as_deref(), Some(".show"));
}

#[test]
fn test_global_prefix_option_wraps_directory_prefix() {
    let project = TestProject::new().controller("PostController.rs", |c| c.method(show()));
    let table = register(
        &project.auto(),
        &project.app(),
        "/blog",
        &Options::new().with("prefix", "v1"),
    );
    let route = &table.routes()[0];
    assert_eq!(route.uri, "/v1/blog/post/show/{id}");
    assert_eq!(route.name.as_deref(), Some("v1.blog.post.show"));
}

#[test]
fn test_injected_request_never_becomes_placeholder() {
    let project = TestProject::new().controller("PostController.rs", |c| {
        c.method(
            MethodDescriptor::new("update")
                .param(ParameterDescriptor::new("id"))
                .param(ParameterDescriptor::new("req").typed("http::Request"))
                .verb(HttpVerb::Put),
        )
    });
    let table = register(&project.auto(), &project.app(), "", &Options::new());
    assert_eq!(table.routes()[0].uri, "/post/update/{id}");
}

#[test]
fn test_missing_directory_fails_before_registering() {
    let project = blog();
    let mut table = RouteTable::new();
    let err = project
        .auto()
        .register(
            &mut table,
            "",
            RouteTarget::Directory(&project.app().join("Nope")),
            &Options::new(),
        )
        .unwrap_err();
    assert!(matches!(err, RouteError::DirectoryNotFound { .. }));
    assert!(table.is_empty());
}

#[test]
fn test_directory_outside_source_roots() {
    let project = blog();
    let elsewhere = tempfile::tempdir().unwrap();
    let mut table = RouteTable::new();
    let err = project
        .auto()
        .register(&mut table, "", RouteTarget::Directory(elsewhere.path()), &Options::new())
        .unwrap_err();
    assert!(matches!(err, RouteError::NamespaceResolution { .. }));
}

#[test]
fn test_undescribed_controller_aborts_walk() {
    let project = TestProject::new()
        .controller("AboutController.rs", |c| c.method(index()))
        .undescribed("ZedController.rs");
    let mut table = RouteTable::new();
    let err = project
        .auto()
        .register(&mut table, "", RouteTarget::Directory(&project.app()), &Options::new())
        .unwrap_err();
    assert!(matches!(err, RouteError::ControllerNotFound { ref class } if class == "App::ZedController"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_sub_directory_namespace() {
    let project = TestProject::new().controller("Blog/PostController.rs", |c| c.method(show()));
    let table = register(&project.auto(), &project.app().join("Blog"), "/blog", &Options::new());
    let route = &table.routes()[0];
    assert_eq!(route.controller, "App::Blog::PostController");
    assert_eq!(route.uri, "/blog/post/show/{id}");
}
