//! Package dependency flags for the generated `package.json`.

use serde::{Serialize, Serializer};

use crate::domain::{entities::answers::SassLibrary, value_objects::VariantLibrary};

/// Which packages the element depends on.
///
/// At most one of the four variant packages is ever set. Unset flags render
/// as `false` so templates can test them directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryFlags {
    #[serde(serialize_with = "or_false")]
    sass_library_pkg: Option<String>,
    #[serde(serialize_with = "or_false")]
    sass_library_path: Option<String>,
    #[serde(serialize_with = "or_false")]
    polymer_library_pkg: Option<String>,
    #[serde(serialize_with = "or_false")]
    lit_library_pkg: Option<String>,
    #[serde(serialize_with = "or_false")]
    slim_library_pkg: Option<String>,
    #[serde(rename = "skateJSLibraryPkg", serialize_with = "or_false")]
    skate_js_library_pkg: Option<String>,
}

impl LibraryFlags {
    pub fn derive(
        use_sass: bool,
        sass_library: Option<&SassLibrary>,
        library: Option<VariantLibrary>,
    ) -> Self {
        let mut flags = Self::default();

        if let Some(sass) = sass_library.filter(|_| use_sass) {
            flags.sass_library_pkg = non_empty(&sass.pkg);
            flags.sass_library_path = non_empty(&sass.path);
        }

        if let Some(library) = library {
            let package = Some(library.package().to_string());
            match library {
                VariantLibrary::Polymer => flags.polymer_library_pkg = package,
                VariantLibrary::Lit => flags.lit_library_pkg = package,
                VariantLibrary::Slim => flags.slim_library_pkg = package,
                VariantLibrary::SkateRenderer => flags.skate_js_library_pkg = package,
            }
        }

        flags
    }

    pub fn sass_library_pkg(&self) -> Option<&str> {
        self.sass_library_pkg.as_deref()
    }

    pub fn sass_library_path(&self) -> Option<&str> {
        self.sass_library_path.as_deref()
    }

    /// The single variant runtime package, if any.
    pub fn variant_package(&self) -> Option<&str> {
        self.polymer_library_pkg
            .as_deref()
            .or(self.lit_library_pkg.as_deref())
            .or(self.slim_library_pkg.as_deref())
            .or(self.skate_js_library_pkg.as_deref())
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn or_false<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(v),
        None => serializer.serialize_bool(false),
    }
}
