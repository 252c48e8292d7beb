//! Options shaping the generated C#.

/// Names used by generated code to reach the runtime container.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EmitOptions {
    /// The partial container class the routines are added to.
    pub container_class: String,
    /// Namespace of the container class; `None` for the global namespace.
    pub namespace: Option<String>,
    /// `using` directives at the top of every generated file.
    pub usings: Vec<String>,
    /// Namespace of the generated attribute classes.
    pub attribute_namespace: String,
    /// Base type of objects in the host object tree.
    pub node_type: String,
    /// Type returned by the container's `CreateScope()`.
    pub scope_type: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            container_class: "InjectionContainer".to_string(),
            namespace: None,
            usings: vec!["Godot".to_string()],
            attribute_namespace: "GodotDiSourceGenerator".to_string(),
            node_type: "Node".to_string(),
            scope_type: "IServiceScope".to_string(),
        }
    }
}
