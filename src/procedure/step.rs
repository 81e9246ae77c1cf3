//! The step tree.
//!
//! Steps live in an arena ([`StepTree`]) owned by the procedure. Each node
//! owns the ordered list of its children's ids and keeps a non-owning link
//! to its parent, which is only ever used to derive names, depth and
//! position.
//!
//! Read access goes through the [`Step`] handle; construction goes through
//! [`StepBuilder`].

use super::fact::{InputDef, OutputDef, ValueType};
use super::text::normalize_long;

/// Separator between the parts of an absolute step name.
pub const NAME_SEPARATOR: &str = ".";

/// Name given to the implicit root step.
pub const ROOT_NAME: &str = "root";

/// Index of a step in its [`StepTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepId(usize);

/// What a [`Step::walk`] visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into the step's children, then carry on.
    Continue,
    /// Leave the step's descendants out of the walk.
    SkipChildren,
    /// End the walk now.
    Stop,
}

#[derive(Debug, Clone, Default)]
struct StepNode {
    name: String,
    short: String,
    long: String,
    inputs: Vec<InputDef>,
    outputs: Vec<OutputDef>,
    parent: Option<StepId>,
    children: Vec<StepId>,
}

/// Arena holding every step of a procedure.
#[derive(Debug, Clone)]
pub struct StepTree {
    nodes: Vec<StepNode>,
}

impl StepTree {
    /// Create a tree holding only a root step named `root`.
    pub fn new() -> Self {
        Self {
            nodes: vec![StepNode {
                name: ROOT_NAME.to_string(),
                ..Default::default()
            }],
        }
    }

    /// Id of the root step.
    pub fn root_id(&self) -> StepId {
        StepId(0)
    }

    /// Read handle for the root step.
    pub fn root(&self) -> Step<'_> {
        self.get(self.root_id())
    }

    /// Read handle for the given step.
    pub fn get(&self, id: StepId) -> Step<'_> {
        Step { tree: self, id }
    }

    /// Builder for the given step.
    pub fn builder(&mut self, id: StepId) -> StepBuilder<'_> {
        StepBuilder { tree: self, id }
    }

    /// Number of steps, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: StepId) -> &StepNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: StepId) -> &mut StepNode {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, node: StepNode) -> StepId {
        self.nodes.push(node);
        StepId(self.nodes.len() - 1)
    }
}

impl Default for StepTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle to one step of a [`StepTree`].
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    tree: &'a StepTree,
    id: StepId,
}

impl<'a> Step<'a> {
    /// The step's id in its tree.
    pub fn id(&self) -> StepId {
        self.id
    }

    /// The step's own name, unique among its siblings.
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// The step's title.
    pub fn short(&self) -> &'a str {
        &self.node().short
    }

    /// The step's body text, already normalized.
    pub fn long(&self) -> &'a str {
        &self.node().long
    }

    /// Inputs in declaration order.
    pub fn inputs(&self) -> &'a [InputDef] {
        &self.node().inputs
    }

    /// Outputs in declaration order.
    pub fn outputs(&self) -> &'a [OutputDef] {
        &self.node().outputs
    }

    /// The parent step, or `None` for the root.
    pub fn parent(&self) -> Option<Step<'a>> {
        self.node().parent.map(|id| self.tree.get(id))
    }

    /// Children in the order they were added.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Step<'a>> + 'a {
        let tree = self.tree;
        self.node().children.iter().map(move |id| tree.get(*id))
    }

    /// Dot-joined names from the root down to this step, e.g. `root.deploy.verify`.
    pub fn absolute_name(&self) -> String {
        let mut parts = vec![self.name()];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            parts.push(parent.name());
            current = parent;
        }
        parts.reverse();
        parts.join(NAME_SEPARATOR)
    }

    /// Number of ancestors; the root has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = *self;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Index of this step within each ancestor's children, outermost first.
    ///
    /// The root's position is empty.
    ///
    /// # Panics
    ///
    /// Panics if an ancestor does not list the step on the path among its
    /// children. That only happens when the tree was corrupted outside of
    /// [`StepBuilder`], or when called on a step still being configured.
    pub fn pos(&self) -> Vec<usize> {
        let mut pos = Vec::new();
        let mut current = *self;
        while let Some(parent) = current.parent() {
            let index = parent
                .node()
                .children
                .iter()
                .position(|id| *id == current.id)
                .unwrap_or_else(|| {
                    panic!(
                        "step '{}' is missing from the children of its parent '{}'",
                        current.absolute_name(),
                        parent.absolute_name()
                    )
                });
            pos.push(index);
            current = parent;
        }
        pos.reverse();
        pos
    }

    /// Visit this step and its descendants in pre-order.
    ///
    /// The step itself is visited first, then each child's subtree in
    /// child order. This is the order in which steps are validated,
    /// documented and executed. An error from `visit` ends the walk and is
    /// returned.
    pub fn walk<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(Step<'a>) -> Result<Visit, E>,
    {
        self.walk_inner(&mut visit).map(|_| ())
    }

    // Returns false once the walk has been stopped.
    fn walk_inner<E, F>(&self, visit: &mut F) -> Result<bool, E>
    where
        F: FnMut(Step<'a>) -> Result<Visit, E>,
    {
        match visit(*self)? {
            Visit::Stop => return Ok(false),
            Visit::SkipChildren => return Ok(true),
            Visit::Continue => {}
        }
        for child in self.children() {
            if !child.walk_inner(visit)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn node(&self) -> &'a StepNode {
        self.tree.node(self.id)
    }
}

/// Configures one step of a [`StepTree`].
///
/// Obtained from [`Procedure`](crate::Procedure) or handed to the closure
/// given to [`StepBuilder::add_step`].
pub struct StepBuilder<'a> {
    tree: &'a mut StepTree,
    id: StepId,
}

impl StepBuilder<'_> {
    /// Set the step's name. Must be unique among its siblings.
    ///
    /// By convention step names are camelCase.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.node_mut().name = name.into();
        self
    }

    /// Set the step's title, used as its section heading.
    pub fn short(&mut self, short: impl Into<String>) -> &mut Self {
        self.node_mut().short = short.into();
        self
    }

    /// Set the step's body text.
    ///
    /// Surrounding blank lines and the indentation shared by all lines are
    /// removed, so bodies can be written indented inside source code.
    pub fn long(&mut self, long: impl AsRef<str>) -> &mut Self {
        self.node_mut().long = normalize_long(long.as_ref());
        self
    }

    /// Declare a string output.
    pub fn output_string(&mut self, name: impl Into<String>, short: impl Into<String>) -> &mut Self {
        self.output(OutputDef::new(ValueType::String, name, short))
    }

    /// Declare an integer output.
    pub fn output_int(&mut self, name: impl Into<String>, short: impl Into<String>) -> &mut Self {
        self.output(OutputDef::new(ValueType::Int, name, short))
    }

    /// Declare a string input.
    pub fn input_string(&mut self, name: impl Into<String>, required: bool) -> &mut Self {
        self.input(InputDef::new(ValueType::String, name, required))
    }

    /// Declare an integer input.
    pub fn input_int(&mut self, name: impl Into<String>, required: bool) -> &mut Self {
        self.input(InputDef::new(ValueType::Int, name, required))
    }

    /// Declare an output.
    pub fn output(&mut self, output: OutputDef) -> &mut Self {
        self.node_mut().outputs.push(output);
        self
    }

    /// Declare an input.
    pub fn input(&mut self, input: InputDef) -> &mut Self {
        self.node_mut().inputs.push(input);
        self
    }

    /// Add a child step.
    ///
    /// The new step is handed to `configure` before it is appended to this
    /// step's children, so nested `add_step` calls inside `configure` build
    /// the whole subtree first.
    pub fn add_step<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut StepBuilder<'_>),
    {
        let child = self.tree.push(StepNode {
            parent: Some(self.id),
            ..Default::default()
        });
        configure(&mut StepBuilder {
            tree: &mut *self.tree,
            id: child,
        });
        self.tree.node_mut(self.id).children.push(child);
        self
    }

    fn node_mut(&mut self) -> &mut StepNode {
        self.tree.node_mut(self.id)
    }
}
