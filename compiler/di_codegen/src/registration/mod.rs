//! Service registration routine.
//!
//! One statement per descriptor, in the order given:
//!
//! ```text
//! Register<IFoo>(() => new Foo(Resolve<IBar>()));          transient
//! RegisterScoped<IFoo>(() => new Foo(Resolve<IBar>()));    scoped
//! var instance_IFoo = new Foo(Resolve<IBar>());            singleton
//! RegisterSingleton<IFoo>(instance_IFoo);
//! ```

use di_ir::{Lifetime, ServiceDescriptor};

use crate::{CodegenContext, EmitOptions, GeneratedSource};

/// File name of the generated registration routine.
pub const REGISTRATION_HINT: &str = "Registry.generated.cs";

/// Emit `partial void RegisterGeneratedServices()`.
///
/// The routine is emitted even when there is nothing to register, so the
/// container's call site always binds to a body.
pub fn emit_registrations(
    descriptors: &[ServiceDescriptor],
    options: &EmitOptions,
) -> GeneratedSource {
    let mut ctx = CodegenContext::new();
    ctx.write_file_header(&options.usings, &[]);
    ctx.begin_container(options);
    ctx.open_block("partial void RegisterGeneratedServices()");

    let mut emitted = 0usize;
    for descriptor in descriptors {
        if !descriptor.is_well_formed() {
            tracing::warn!(
                implementation = %descriptor.implementation(),
                interface = %descriptor.interface(),
                "skipping malformed descriptor"
            );
            continue;
        }
        emit_registration(&mut ctx, descriptor);
        emitted += 1;
    }

    ctx.close_block();
    ctx.end_container();

    tracing::debug!(registrations = emitted, "emitted registration routine");
    GeneratedSource::new(REGISTRATION_HINT, ctx.take_output())
}

fn emit_registration(ctx: &mut CodegenContext, descriptor: &ServiceDescriptor) {
    let interface = descriptor.interface();
    let construction = construction_expr(descriptor);

    match descriptor.lifetime() {
        Lifetime::Transient => {
            ctx.writeln(&format!("Register<{interface}>(() => {construction});"));
        }
        Lifetime::Scoped => {
            ctx.writeln(&format!(
                "RegisterScoped<{interface}>(() => {construction});"
            ));
        }
        Lifetime::Singleton => {
            let local = ctx.unique_identifier(&format!(
                "instance_{}",
                CodegenContext::mangle(interface.as_str())
            ));
            ctx.writeln(&format!("var {local} = {construction};"));
            ctx.writeln(&format!("RegisterSingleton<{interface}>({local});"));
        }
    }
}

/// `new Impl(Resolve<P1>(), Resolve<P2>(), ...)` in parameter order.
fn construction_expr(descriptor: &ServiceDescriptor) -> String {
    let args = descriptor
        .parameter_types()
        .iter()
        .map(|param| format!("Resolve<{param}>()"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("new {}({args})", descriptor.implementation())
}
