//! Scope lifecycle routine.
//!
//! Wires the host tree's add/remove notifications to the container so that
//! every live instance of a scope-root type owns exactly one scope. The scope
//! is created when the node enters the tree and disposed when it leaves.

use rustc_hash::FxHashSet;

use di_ir::{ScopeRootDeclaration, TypeName};

use crate::{CodegenContext, EmitOptions, GeneratedSource};

/// File name of the generated lifecycle routine.
pub const SCOPE_LIFECYCLE_HINT: &str = "ScopeLifecycle.generated.cs";

const COLLECTIONS_USING: &str = "System.Collections.Generic";
const TABLE: &str = "_scopedRoots";

/// Emit the scope-root tracking members, or `None` when there are no roots.
///
/// Root types are matched in first-seen order and the first match wins, so
/// a node that is an instance of several root types still gets one scope.
pub fn emit_scope_lifecycle(
    scope_roots: &[ScopeRootDeclaration],
    options: &EmitOptions,
) -> Option<GeneratedSource> {
    let roots = distinct_roots(scope_roots);
    if roots.is_empty() {
        return None;
    }

    let node = &options.node_type;
    let mut ctx = CodegenContext::new();
    ctx.write_file_header(&options.usings, &[COLLECTIONS_USING]);
    ctx.begin_container(options);

    ctx.writeln(&format!(
        "private readonly Dictionary<{node}, {}> {TABLE} = new();",
        options.scope_type
    ));
    ctx.newline();

    ctx.open_block("partial void RegisterScopeHandlers()");
    ctx.writeln("var tree = GetTree();");
    ctx.writeln("tree.NodeAdded += OnNodeAdded;");
    ctx.writeln("tree.NodeRemoved += OnNodeRemoved;");
    ctx.close_block();
    ctx.newline();

    ctx.open_block(&format!("private void OnNodeAdded({node} node)"));
    ctx.open_block(&format!("if ({TABLE}.ContainsKey(node))"));
    ctx.writeln("return;");
    ctx.close_block();
    ctx.newline();
    for (index, root) in roots.iter().enumerate() {
        let keyword = if index == 0 { "if" } else { "else if" };
        ctx.open_block(&format!("{keyword} (node is {root})"));
        ctx.writeln(&format!("{TABLE}[node] = CreateScope();"));
        ctx.close_block();
    }
    ctx.close_block();
    ctx.newline();

    // Evict before disposing so a throwing Dispose cannot leave a stale entry.
    ctx.open_block(&format!("private void OnNodeRemoved({node} node)"));
    ctx.open_block(&format!("if ({TABLE}.Remove(node, out var scope))"));
    ctx.writeln("scope.Dispose();");
    ctx.close_block();
    ctx.close_block();

    ctx.end_container();

    tracing::debug!(roots = roots.len(), "emitted scope lifecycle routine");
    Some(GeneratedSource::new(SCOPE_LIFECYCLE_HINT, ctx.take_output()))
}

/// Unique, non-empty root types in first-seen order.
fn distinct_roots(scope_roots: &[ScopeRootDeclaration]) -> Vec<&TypeName> {
    let mut seen = FxHashSet::default();
    let mut roots = Vec::with_capacity(scope_roots.len());
    for root in scope_roots {
        if root.class.is_empty() {
            tracing::warn!("skipping scope root without a class name");
            continue;
        }
        if seen.insert(&root.class) {
            roots.push(&root.class);
        }
    }
    roots
}
