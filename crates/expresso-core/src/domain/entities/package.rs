//! npm `package.json` manifest for the generated application.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    entities::{assembly::AssemblyModel, blueprint::Blueprint},
    value_objects::LanguageVariant,
};

/// Serializable image of the generated `package.json`.
///
/// Dependency maps are `BTreeMap`s so the emitted JSON is key-sorted, which
/// keeps repeated runs byte-identical.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PackageManifest {
    name: String,
    version: String,
    private: bool,
    scripts: BTreeMap<String, String>,
    dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Derive the manifest from the blueprint and its assembly model.
    ///
    /// The assembly contributes the dimension-implied dependencies; the
    /// fixed base set and tooling devDependencies are added here.
    pub fn derive(blueprint: &Blueprint, assembly: &AssemblyModel) -> Self {
        let variant = blueprint.variant();

        let mut dependencies = base_dependencies();
        dependencies.extend(
            assembly
                .dependencies()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        Self {
            name: blueprint.kebab_name(),
            version: "1.0.0".into(),
            private: true,
            scripts: scripts(variant),
            dependencies,
            dev_dependencies: dev_dependencies(variant),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &BTreeMap<String, String> {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &BTreeMap<String, String> {
        &self.dev_dependencies
    }

    /// Pretty-printed JSON with a trailing newline, ready to write.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self).map(|mut json| {
            json.push('\n');
            json
        })
    }
}

fn base_dependencies() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("debug".to_string(), "~2.6.9".to_string()),
        ("dotenv".to_string(), "^8.2.0".to_string()),
        ("express".to_string(), "~4.16.1".to_string()),
    ])
}

fn scripts(variant: LanguageVariant) -> BTreeMap<String, String> {
    match variant {
        LanguageVariant::Js => BTreeMap::from([
            ("start".to_string(), "npm run dev".to_string()),
            (
                "dev".to_string(),
                "nodemon ./server/bin/www.js --exec babel-node".to_string(),
            ),
            (
                "build".to_string(),
                "babel server --out-dir dist --copy-files".to_string(),
            ),
            ("prod".to_string(), "node ./dist/bin/www.js".to_string()),
        ]),
        LanguageVariant::Ts => BTreeMap::from([
            ("start".to_string(), "npm run dev".to_string()),
            (
                "dev".to_string(),
                "nodemon ./server/bin/www.ts --exec ts-node".to_string(),
            ),
            ("build".to_string(), "tsc".to_string()),
            ("prod".to_string(), "node ./dist/bin/www.js".to_string()),
        ]),
    }
}

fn dev_dependencies(variant: LanguageVariant) -> BTreeMap<String, String> {
    match variant {
        LanguageVariant::Js => BTreeMap::from([
            ("@babel/cli".to_string(), "^7.2.3".to_string()),
            ("@babel/core".to_string(), "^7.2.2".to_string()),
            ("@babel/node".to_string(), "^7.2.2".to_string()),
            ("@babel/preset-env".to_string(), "^7.3.1".to_string()),
            ("eslint".to_string(), "^5.13.0".to_string()),
            ("nodemon".to_string(), "^1.18.9".to_string()),
        ]),
        LanguageVariant::Ts => BTreeMap::from([
            ("@types/express".to_string(), "^4.16.1".to_string()),
            ("@types/node".to_string(), "^10.12.21".to_string()),
            ("eslint".to_string(), "^5.13.0".to_string()),
            ("nodemon".to_string(), "^1.18.9".to_string()),
            ("ts-node".to_string(), "^8.0.2".to_string()),
            ("typescript".to_string(), "^3.3.1".to_string()),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Database, LanguageVariant};

    fn blueprint(variant: LanguageVariant, database: Database) -> Blueprint {
        Blueprint::builder("My Cool App")
            .variant(variant)
            .database(database)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn name_is_kebab_cased() {
        let bp = blueprint(LanguageVariant::Js, Database::None);
        let assembly = AssemblyModel::build(&bp).unwrap();
        let pkg = PackageManifest::derive(&bp, &assembly);
        assert_eq!(pkg.name(), "my-cool-app");
    }

    #[test]
    fn base_set_is_always_present() {
        let bp = blueprint(LanguageVariant::Js, Database::None);
        let assembly = AssemblyModel::build(&bp).unwrap();
        let pkg = PackageManifest::derive(&bp, &assembly);
        for dep in ["express", "debug", "dotenv"] {
            assert!(pkg.dependencies().contains_key(dep), "missing {dep}");
        }
    }

    #[test]
    fn sequelize_ts_pulls_sql_driver_and_ts_toolchain() {
        let bp = blueprint(LanguageVariant::Ts, Database::Sequelize);
        let assembly = AssemblyModel::build(&bp).unwrap();
        let pkg = PackageManifest::derive(&bp, &assembly);

        assert_eq!(pkg.dependencies().get("mysql2").map(String::as_str), Some("^1.6.4"));
        assert!(pkg.dependencies().contains_key("sequelize"));
        assert!(pkg.dev_dependencies().contains_key("typescript"));
        assert!(pkg.dev_dependencies().contains_key("ts-node"));
    }

    #[test]
    fn json_output_is_sorted_and_stable() {
        let bp = blueprint(LanguageVariant::Js, Database::Mongoose);
        let assembly = AssemblyModel::build(&bp).unwrap();
        let pkg = PackageManifest::derive(&bp, &assembly);

        let a = pkg.to_json().unwrap();
        let b = pkg.to_json().unwrap();
        assert_eq!(a, b);
        assert!(a.ends_with('\n'));

        // serde_json preserves BTreeMap iteration order: sorted keys.
        let cookie = a.find("cookie-parser").unwrap();
        let morgan = a.find("morgan").unwrap();
        assert!(cookie < morgan);
    }

    #[test]
    fn private_flag_is_set() {
        let bp = blueprint(LanguageVariant::Js, Database::None);
        let assembly = AssemblyModel::build(&bp).unwrap();
        let json = PackageManifest::derive(&bp, &assembly).to_json().unwrap();
        assert!(json.contains("\"private\": true"));
    }
}
