#[doc(hidden)]
pub use paste;

/// Creates a visitor.
///
/// Each `visit name(v, node: &Node) -> Result<()> { .. }` entry produces
/// - a required `visit_name(&mut self, node: &Node)` method on the visitor trait,
/// - a free `walk_name(v, node)` function whose body is the given block, which should
///   `accept` the children of `node` in source order,
/// - an implementation of the accept trait for `Node` that dispatches to `visit_name`.
///
/// The visitor methods have no default implementation, so a visitor that does not handle
/// every node kind does not compile.
///
/// # Examples
/// ```
/// use parl_visitor_gen::visitor;
///
/// pub struct Leaf(u32);
/// pub struct Pair(Leaf, Leaf);
///
/// visitor! {
///     pub trait Visitor, pub trait Accept {
///         visit leaf(v, node: &Leaf) -> Result<()> { Ok(()) }
///         visit pair(v, node: &Pair) -> Result<()> {
///             node.0.accept(v)?;
///             node.1.accept(v)
///         }
///     }
/// }
///
/// struct Sum(u32);
///
/// impl Visitor for Sum {
///     type Err = ();
///
///     fn visit_leaf(&mut self, node: &Leaf) -> Result<(), ()> {
///         self.0 += node.0;
///         walk_leaf(self, node)
///     }
///
///     fn visit_pair(&mut self, node: &Pair) -> Result<(), ()> {
///         walk_pair(self, node)
///     }
/// }
///
/// let mut sum = Sum(0);
/// Pair(Leaf(1), Leaf(2)).accept(&mut sum).unwrap();
/// assert_eq!(sum.0, 3);
/// ```
#[macro_export]
macro_rules! visitor {
    (
        $(#[$trait_meta:meta])*
        $trait_vis:vis trait $id:ident, $accept_vis:vis trait $accept:ident {
            $(
                $(#[$meta:meta])*
                visit $name:ident ($visitor_id:ident, $visited_id:ident: &$visited:ty) -> Result<()> $block:block
            )+
        }
    ) => {
        $(#[$trait_meta])*
        $trait_vis trait $id {
            type Err;

            $(
            $crate::paste::paste! {
                $(#[$meta])*
                fn [<visit_ $name>](&mut self, $visited_id: &$visited) -> ::std::result::Result<(), Self::Err>;
            }
            )+
        }

        /// A node that can be dispatched to the matching visitor method
        $accept_vis trait $accept {
            fn accept<V: $id + ?Sized>(&self, visitor: &mut V) -> ::std::result::Result<(), V::Err>;
        }

        $(
        $crate::paste::paste! {
            #[allow(unused_variables)]
            $trait_vis fn [<walk_ $name>]<V: $id + ?Sized>(
                $visitor_id: &mut V,
                $visited_id: &$visited,
            ) -> ::std::result::Result<(), V::Err> $block

            impl $accept for $visited {
                fn accept<V: $id + ?Sized>(&self, visitor: &mut V) -> ::std::result::Result<(), V::Err> {
                    visitor.[<visit_ $name>](self)
                }
            }
        }
        )+
    };
}

#[cfg(test)]
mod tests {
    pub struct Leaf(pub &'static str);
    pub struct Node(pub Vec<Leaf>);

    visitor! {
        pub trait TestVisitor, pub trait TestAccept {
            visit leaf(v, leaf: &Leaf) -> Result<()> { Ok(()) }
            visit node(v, node: &Node) -> Result<()> {
                for leaf in &node.0 {
                    leaf.accept(v)?;
                }
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl TestVisitor for Recorder {
        type Err = &'static str;

        fn visit_leaf(&mut self, leaf: &Leaf) -> Result<(), Self::Err> {
            if leaf.0.is_empty() {
                return Err("empty leaf");
            }
            self.0.push(leaf.0.to_string());
            walk_leaf(self, leaf)
        }

        fn visit_node(&mut self, node: &Node) -> Result<(), Self::Err> {
            self.0.push("node".to_string());
            walk_node(self, node)
        }
    }

    #[test]
    fn test_visits_in_order() {
        let tree = Node(vec![Leaf("a"), Leaf("b")]);
        let mut recorder = Recorder::default();
        tree.accept(&mut recorder).unwrap();
        assert_eq!(recorder.0, ["node", "a", "b"]);
    }

    #[test]
    fn test_error_stops_traversal() {
        let tree = Node(vec![Leaf("a"), Leaf(""), Leaf("c")]);
        let mut recorder = Recorder::default();
        assert_eq!(tree.accept(&mut recorder), Err("empty leaf"));
        assert_eq!(recorder.0, ["node", "a"]);
    }
}
