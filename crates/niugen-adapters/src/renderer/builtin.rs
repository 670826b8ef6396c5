//! Built-in templates and the renderer over them.
//!
//! The template set ships inside the binary. Placeholders use the
//! `{{UPPER_SNAKE}}` convention resolved by
//! [`niugen_core::domain::TemplateContext`]; every key a template references
//! is set by `TemplateContext::for_package`, and the renderer fails loudly
//! if that ever stops being true.

use niugen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateContext, TemplateId},
    error::NiugenResult,
};
use tracing::debug;

/// `package.json`. The `{{PEER_DEPS}}` slot is either empty or a
/// pre-rendered `peerDependencies` fragment; prettier normalizes the result.
const MANIFEST: &str = r#"{
  "name": "{{NAME}}",
  "version": "0.0.0",
  "private": true,
  "main": "./src/index.ts",
  "types": "./src/index.ts",
  "scripts": {
    "lint": "eslint .",
    "typecheck": "tsc --noEmit"
  }{{PEER_DEPS}}
}
"#;

const COMPILER_CONFIG: &str = r#"{
  "extends": "{{TSCONFIG_BASE}}",
  "compilerOptions": {
    "rootDir": "src",
    "outDir": "dist"
  },
  "include": ["src"]
}
"#;

const ENTRY_SOURCE: &str = r#"/**
 * {{NAME}}
 *
 * Everything public is exported from here.
 */
export {};
"#;

const README: &str = r#"# {{NAME}}

A {{KIND}} package in this workspace, living at `{{PACKAGE_DIR}}`.

## Usage

```ts
import {} from "{{NAME}}";
```
"#;

/// Renderer over the built-in template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn template_source(template: TemplateId) -> &'static str {
    match template {
        TemplateId::Manifest => MANIFEST,
        TemplateId::CompilerConfig => COMPILER_CONFIG,
        TemplateId::EntrySource => ENTRY_SOURCE,
        TemplateId::Readme => README,
    }
}

impl TemplateRenderer for BuiltinRenderer {
    fn render(&self, template: TemplateId, context: &TemplateContext) -> NiugenResult<String> {
        debug!(template = %template, "rendering builtin template");
        context
            .render(template_source(template))
            .map_err(|e| {
                ApplicationError::RenderFailed {
                    template: template.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niugen_core::domain::{GeneratorAnswers, PackageKind, dest};

    fn context(react: bool) -> TemplateContext {
        let answers =
            GeneratorAnswers::new("niu", "foo-bar", PackageKind::Lib, None, react).unwrap();
        let derived = dest::resolve(&answers).unwrap();
        TemplateContext::for_package(&answers, &derived)
    }

    #[test]
    fn every_template_renders_with_the_package_context() {
        let ctx = context(false);
        let renderer = BuiltinRenderer::new();
        for template in [
            TemplateId::Manifest,
            TemplateId::CompilerConfig,
            TemplateId::EntrySource,
            TemplateId::Readme,
        ] {
            let out = renderer.render(template, &ctx).unwrap();
            assert!(
                !out.contains("{{"),
                "unrendered placeholder left in {template}: {out}"
            );
        }
    }

    #[test]
    fn manifest_declares_the_scoped_name() {
        let out = BuiltinRenderer::new()
            .render(TemplateId::Manifest, &context(false))
            .unwrap();
        assert!(out.contains("\"name\": \"@niu/foo-bar\""));
        assert!(!out.contains("peerDependencies"));
    }

    #[test]
    fn manifest_with_react_adds_peer_dependencies() {
        let out = BuiltinRenderer::new()
            .render(TemplateId::Manifest, &context(true))
            .unwrap();
        assert!(out.contains("\"peerDependencies\""));
        assert!(out.contains("\"react\""));
        // Fragment joins with a comma, so the JSON stays well-formed.
        assert!(out.contains("},"));
    }

    #[test]
    fn readme_names_the_package_dir() {
        let out = BuiltinRenderer::new()
            .render(TemplateId::Readme, &context(false))
            .unwrap();
        assert!(out.contains("packages/foo-bar"));
        assert!(out.starts_with("# @niu/foo-bar"));
    }

    #[test]
    fn empty_context_fails_instead_of_passing_placeholders_through() {
        let err = BuiltinRenderer::new()
            .render(TemplateId::Manifest, &TemplateContext::new())
            .unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }
}
