//! CSS handling for email output.
//!
//! Many email clients ignore CSS custom properties and `<style>` blocks, so
//! the stylesheet is flattened in two steps:
//!
//! 1. [`resolve_css_variables`] rewrites every `var(--name)` to the literal
//!    value declared by `--name: value;`.
//! 2. A [`StyleInliner`] copies the remaining rules into `style` attributes.
//!
//! ```rust
//! use newsprint_render::resolve_css_variables;
//!
//! let css = ":root { --brand: #112233; } h1 { color: var(--brand); border: var(--edge); }";
//! let out = resolve_css_variables(css).into_html();
//!
//! assert_eq!(out, ":root { --brand: #112233; } h1 { color: #112233; border: var(--edge); }");
//! ```

mod inline;
mod variables;

#[cfg(feature = "css-inline")]
pub use inline::CssInliner;
pub use inline::StyleInliner;
pub use variables::{resolve_css_variables, CssVariables};
