//! Build wiring of the `SATCollisions` host-engine module.
//!
//! A host engine embedding this library compiles it as a module with declared
//! include paths and link dependencies. [`ModuleRules::for_target`] produces
//! those declarations for a given build target, as plain data that the host
//! build tool turns into compiler and linker invocations.
//!
//! ```
//! use sat2d::host_module::{ModuleRules, TargetRules};
//!
//! let game = ModuleRules::for_target(&TargetRules { build_editor: false });
//! let editor = ModuleRules::for_target(&TargetRules { build_editor: true });
//!
//! assert!(!game.depends_on("UnrealEd"));
//! assert!(editor.depends_on("UnrealEd"));
//! assert!(editor.depends_on("Engine"));
//! ```

/// The name of the module as seen by the host build tool.
pub const MODULE_NAME: &str = "SATCollisions";

const PRIVATE_INCLUDE_PATHS: &[&str] = &["SATCollisions/Private"];
const PUBLIC_DEPENDENCIES: &[&str] = &["Core", "CoreUObject", "Engine", "InputCore"];
const PRIVATE_DEPENDENCIES: &[&str] = &["Slate", "SlateCore"];
const EDITOR_DEPENDENCIES: &[&str] = &["UnrealEd", "BlueprintGraph"];

/// The build-target flags the module declarations depend on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TargetRules {
    /// Is the target built with editor support?
    pub build_editor: bool,
}

/// How the module uses precompiled headers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PchUsage {
    /// Use the module's explicit precompiled header if any, a shared one otherwise.
    #[default]
    UseExplicitOrSharedPchs,
    /// Only use shared precompiled headers.
    UseSharedPchs,
    /// Do not use precompiled headers.
    NoPchs,
}

/// The include paths and dependencies declared by the module for one build target.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRules {
    /// The module name.
    pub name: String,
    /// The precompiled header mode.
    pub pch_usage: PchUsage,
    /// Include paths only visible to the module's own sources.
    pub private_include_paths: Vec<String>,
    /// Modules linked statically and exposed to the modules depending on this one.
    pub public_dependencies: Vec<String>,
    /// Modules linked statically for the module's own use.
    pub private_dependencies: Vec<String>,
    /// Modules loaded at runtime instead of being linked.
    pub dynamically_loaded: Vec<String>,
}

impl ModuleRules {
    /// The module declarations for the given build target.
    ///
    /// Editor-only modules are added to the private dependencies if, and only
    /// if, `target.build_editor` is set.
    pub fn for_target(target: &TargetRules) -> Self {
        let mut rules = ModuleRules {
            name: MODULE_NAME.to_string(),
            pch_usage: PchUsage::UseExplicitOrSharedPchs,
            private_include_paths: Vec::new(),
            public_dependencies: Vec::new(),
            private_dependencies: Vec::new(),
            dynamically_loaded: Vec::new(),
        };

        add_unique(&mut rules.private_include_paths, PRIVATE_INCLUDE_PATHS);
        add_unique(&mut rules.public_dependencies, PUBLIC_DEPENDENCIES);
        add_unique(&mut rules.private_dependencies, PRIVATE_DEPENDENCIES);

        if target.build_editor {
            add_unique(&mut rules.private_dependencies, EDITOR_DEPENDENCIES);
        }

        log::debug!(
            "Module rules for {} (editor: {}): {} public, {} private dependencies.",
            rules.name,
            target.build_editor,
            rules.public_dependencies.len(),
            rules.private_dependencies.len()
        );

        rules
    }

    /// Adds public dependencies, skipping the ones already declared.
    pub fn add_public_dependencies(&mut self, names: &[&str]) {
        add_unique(&mut self.public_dependencies, names);
    }

    /// Adds private dependencies, skipping the ones already declared.
    pub fn add_private_dependencies(&mut self, names: &[&str]) {
        add_unique(&mut self.private_dependencies, names);
    }

    /// Iterates through the public, then private, statically linked dependencies.
    pub fn all_dependencies(&self) -> impl Iterator<Item = &str> {
        self.public_dependencies
            .iter()
            .chain(self.private_dependencies.iter())
            .map(String::as_str)
    }

    /// Is `name` declared as a public or private dependency?
    pub fn depends_on(&self, name: &str) -> bool {
        self.all_dependencies().any(|dep| dep == name)
    }

    /// Is `name` a module only linked when building with editor support?
    pub fn is_editor_only(name: &str) -> bool {
        EDITOR_DEPENDENCIES.iter().any(|dep| *dep == name)
    }
}

fn add_unique(list: &mut Vec<String>, names: &[&str]) {
    for name in names {
        if !list.iter().any(|existing| existing == name) {
            list.push(name.to_string());
        }
    }
}
