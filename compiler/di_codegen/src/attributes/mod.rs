//! Attribute classes users annotate their services with.

use di_ir::Lifetime;

use crate::{CodegenContext, EmitOptions, GeneratedSource};

/// File name of the generated attribute definitions.
pub const ATTRIBUTES_HINT: &str = "ServiceAttributes.generated.cs";

/// Emit the lifetime, constructor and scope-root attribute classes.
pub fn emit_attribute_definitions(options: &EmitOptions) -> GeneratedSource {
    let mut ctx = CodegenContext::new();
    ctx.write_file_header(&[], &["System"]);
    ctx.open_block(&format!("namespace {}", options.attribute_namespace));

    for lifetime in Lifetime::ALL {
        let name = format!("{}Attribute", lifetime.marker_name());
        ctx.writeln("[AttributeUsage(AttributeTargets.Class)]");
        ctx.open_block(&format!("public sealed class {name} : Attribute"));
        ctx.writeln(&format!(
            "public {name}(Type serviceType) => ServiceType = serviceType;"
        ));
        ctx.newline();
        ctx.writeln("public Type ServiceType { get; }");
        ctx.close_block();
        ctx.newline();
    }

    marker_attribute(&mut ctx, "Constructor", "ConstructorAttribute");
    ctx.newline();
    marker_attribute(&mut ctx, "Class", "ScopeRootAttribute");

    ctx.close_block();
    GeneratedSource::new(ATTRIBUTES_HINT, ctx.take_output())
}

/// An attribute without arguments.
fn marker_attribute(ctx: &mut CodegenContext, target: &str, name: &str) {
    ctx.writeln(&format!("[AttributeUsage(AttributeTargets.{target})]"));
    ctx.open_block(&format!("public sealed class {name} : Attribute"));
    ctx.close_block();
}
