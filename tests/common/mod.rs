#![allow(dead_code)]

pub mod project {
    use autoroute::{AutoRoute, ControllerCatalog, ControllerDescriptor, ProjectConfig};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A throwaway project with an `app/` source root mapped to `App`.
    pub struct TestProject {
        dir: TempDir,
        catalog: ControllerCatalog,
    }

    impl TestProject {
        pub fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("app")).unwrap();
            Self {
                dir,
                catalog: ControllerCatalog::new(),
            }
        }

        pub fn root(&self) -> &Path {
            self.dir.path()
        }

        pub fn app(&self) -> PathBuf {
            self.root().join("app")
        }

        /// Controller name for a file below `app/`.
        pub fn class_for(relative: &str) -> String {
            let stem = relative.strip_suffix(".rs").unwrap_or(relative);
            format!("App::{}", stem.replace('/', "::"))
        }

        /// Write an (empty) controller file below `app/` and describe it in
        /// the catalog.
        pub fn controller(
            mut self,
            relative: &str,
            build: impl FnOnce(ControllerDescriptor) -> ControllerDescriptor,
        ) -> Self {
            let descriptor = build(ControllerDescriptor::new(Self::class_for(relative)));
            self = self.file(&format!("app/{relative}"), "");
            self.catalog.insert(descriptor);
            self
        }

        /// Write a controller file without describing it.
        pub fn undescribed(self, relative: &str) -> Self {
            self.file(&format!("app/{relative}"), "")
        }

        pub fn file(self, relative: &str, contents: &str) -> Self {
            let path = self.root().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
            self
        }

        pub fn config(&self) -> ProjectConfig {
            ProjectConfig::default()
                .with_project_root(self.root())
                .with_source_root("App", "app")
        }

        pub fn auto(&self) -> AutoRoute {
            AutoRoute::new(self.config(), self.catalog.clone())
        }

        /// Write `autoroute.toml` with the `App` source root plus `extra`.
        pub fn write_config(&self, extra: &str) -> PathBuf {
            let path = self.root().join("autoroute.toml");
            fs::write(&path, format!("{extra}\n[source_roots]\n\"App\" = \"app\"\n")).unwrap();
            path
        }
    }
}

pub mod descriptors {
    use autoroute::{HttpVerb, MethodDescriptor, ParameterDescriptor};

    pub fn index() -> MethodDescriptor {
        MethodDescriptor::new("index").verb(HttpVerb::Get)
    }

    /// `show(request: Request, id)` marked GET
    pub fn show() -> MethodDescriptor {
        MethodDescriptor::new("show")
            .param(ParameterDescriptor::new("request").typed("Request"))
            .param(ParameterDescriptor::new("id"))
            .verb(HttpVerb::Get)
    }
}
