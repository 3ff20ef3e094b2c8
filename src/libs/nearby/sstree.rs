use crate::libs::nearby::topic::Topic;

/// Children per internal node and points per leaf before a split is forced.
const FAN_OUT: usize = 16;
const SPLIT_SIZE: usize = FAN_OUT / 2;

pub type NodeId = usize;

enum NodeKind {
    Leaf(Vec<Topic>),
    Internal(Vec<NodeId>),
}

struct Node {
    parent: Option<NodeId>,
    centroid: (f64, f64),
    radius: f64,
    /// Per-axis variance estimate used only to pick a split axis; see
    /// [`SsTree::recompute_internal_stats`] for how it's derived for
    /// internal nodes.
    var: (f64, f64),
    kind: NodeKind,
}

fn mean(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let sx: f64 = points.iter().map(|p| p.0).sum();
    let sy: f64 = points.iter().map(|p| p.1).sum();
    (sx / n, sy / n)
}

fn sq_dist(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

/// Similarity search tree over 2-D topic points.
///
/// Bounded fan-out (`M` = 16, splitting at `M/2`), arena-indexed so that
/// parent links are plain `usize` indices rather than owned back-pointers.
/// A node's `radius` always bounds every point in its subtree and its
/// `centroid`/`var` are recomputed from its immediate children (or points,
/// for a leaf) rather than maintained incrementally; this is simpler than
/// threading a running weighted mean through splits and, since correctness
/// of a query depends only on the radius bound holding (never on the tree's
/// exact shape), it costs nothing but a little search efficiency.
pub struct SsTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SsTree {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            centroid: (0.0, 0.0),
            radius: 0.0,
            var: (0.0, 0.0),
            kind: NodeKind::Leaf(Vec::new()),
        };
        Self { nodes: vec![root], root: 0 }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn centroid(&self, id: NodeId) -> (f64, f64) {
        self.nodes[id].centroid
    }

    pub fn radius(&self, id: NodeId) -> f64 {
        self.nodes[id].radius
    }

    /// The lower bound on the distance from `(x, y)` to any point in this
    /// node's subtree.
    pub fn lower_bound(&self, id: NodeId, x: f64, y: f64) -> f64 {
        let (cx, cy) = self.nodes[id].centroid;
        let dx = cx - x;
        let dy = cy - y;
        ((dx * dx + dy * dy).sqrt() - self.nodes[id].radius).max(0.0)
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        match &self.nodes[id].kind {
            NodeKind::Internal(c) => Some(c),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn points(&self, id: NodeId) -> Option<&[Topic]> {
        match &self.nodes[id].kind {
            NodeKind::Leaf(p) => Some(p),
            NodeKind::Internal(_) => None,
        }
    }

    pub fn insert(&mut self, topic: Topic) {
        let leaf_id = self.find_leaf(topic.x, topic.y);
        let full = match &self.nodes[leaf_id].kind {
            NodeKind::Leaf(points) => points.len() >= FAN_OUT,
            NodeKind::Internal(_) => unreachable!("descent always ends on a leaf"),
        };

        if !full {
            if let NodeKind::Leaf(points) = &mut self.nodes[leaf_id].kind {
                points.push(topic);
            }
            self.recompute_leaf_stats(leaf_id);
            self.propagate_up(leaf_id);
            return;
        }

        let mut cur = leaf_id;
        let mut overflow = self.split_leaf_with_new_point(leaf_id, topic);

        loop {
            match self.nodes[cur].parent {
                None => {
                    let new_root = self.push_node(Node {
                        parent: None,
                        centroid: (0.0, 0.0),
                        radius: 0.0,
                        var: (0.0, 0.0),
                        kind: NodeKind::Internal(vec![cur, overflow]),
                    });
                    self.nodes[cur].parent = Some(new_root);
                    self.nodes[overflow].parent = Some(new_root);
                    self.recompute_internal_stats(new_root);
                    self.root = new_root;
                    break;
                }
                Some(parent_id) => {
                    let count = match &self.nodes[parent_id].kind {
                        NodeKind::Internal(c) => c.len(),
                        NodeKind::Leaf(_) => unreachable!("a leaf's parent is always internal"),
                    };
                    if count < FAN_OUT {
                        if let NodeKind::Internal(children) = &mut self.nodes[parent_id].kind {
                            children.push(overflow);
                        }
                        self.nodes[overflow].parent = Some(parent_id);
                        self.recompute_internal_stats(parent_id);
                        self.propagate_up(parent_id);
                        break;
                    } else {
                        overflow = self.split_internal_with_overflow(parent_id, overflow);
                        cur = parent_id;
                    }
                }
            }
        }
    }

    fn find_leaf(&self, x: f64, y: f64) -> NodeId {
        let mut node_id = self.root;
        loop {
            let children = match &self.nodes[node_id].kind {
                NodeKind::Internal(c) => c.clone(),
                NodeKind::Leaf(_) => return node_id,
            };
            let mut best_child = children[0];
            let mut best_d = sq_dist(self.nodes[children[0]].centroid, (x, y));
            for &c in &children[1..] {
                let d = sq_dist(self.nodes[c].centroid, (x, y));
                if d < best_d {
                    best_d = d;
                    best_child = c;
                }
            }
            node_id = best_child;
        }
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn recompute_leaf_stats(&mut self, leaf_id: NodeId) {
        let points = match &self.nodes[leaf_id].kind {
            NodeKind::Leaf(p) => p.clone(),
            NodeKind::Internal(_) => unreachable!(),
        };
        let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        let (cx, cy) = mean(&coords);
        let mut radius = 0.0;
        let mut vx = 0.0;
        let mut vy = 0.0;
        for (x, y) in &coords {
            let dx = x - cx;
            let dy = y - cy;
            radius = f64::max(radius, (dx * dx + dy * dy).sqrt());
            vx = f64::max(vx, dx * dx);
            vy = f64::max(vy, dy * dy);
        }
        let node = &mut self.nodes[leaf_id];
        node.centroid = (cx, cy);
        node.radius = radius;
        node.var = (vx, vy);
    }

    /// Recomputes centroid as the unweighted mean of the immediate
    /// children's centroids (each child counts once, regardless of how many
    /// points it holds underneath), and radius/variance so that every
    /// child's own bound is fully covered.
    fn recompute_internal_stats(&mut self, node_id: NodeId) {
        let children = match &self.nodes[node_id].kind {
            NodeKind::Internal(c) => c.clone(),
            NodeKind::Leaf(_) => unreachable!(),
        };
        let coords: Vec<(f64, f64)> = children.iter().map(|&c| self.nodes[c].centroid).collect();
        let (cx, cy) = mean(&coords);
        let mut radius = 0.0;
        let mut vx = 0.0;
        let mut vy = 0.0;
        for &c in &children {
            let child = &self.nodes[c];
            let dx = cx - child.centroid.0;
            let dy = cy - child.centroid.1;
            let d = (dx * dx + dy * dy).sqrt();
            radius = f64::max(radius, d + child.radius);
            vx = f64::max(vx, dx * dx + child.radius * child.radius);
            vy = f64::max(vy, dy * dy + child.radius * child.radius);
        }
        let node = &mut self.nodes[node_id];
        node.centroid = (cx, cy);
        node.radius = radius;
        node.var = (vx, vy);
    }

    fn propagate_up(&mut self, node_id: NodeId) {
        let mut cur = node_id;
        while let Some(parent) = self.nodes[cur].parent {
            self.recompute_internal_stats(parent);
            cur = parent;
        }
    }

    /// Splits a full leaf's existing points along its higher-variance axis,
    /// assigns `new_point` to whichever half's centroid is closer to the
    /// leaf's old centroid, keeps that half in place as `leaf_id` and
    /// returns a freshly allocated node for the other half.
    fn split_leaf_with_new_point(&mut self, leaf_id: NodeId, new_point: Topic) -> NodeId {
        let old_centroid = self.nodes[leaf_id].centroid;
        let var = self.nodes[leaf_id].var;
        let mut points = match &self.nodes[leaf_id].kind {
            NodeKind::Leaf(p) => p.clone(),
            NodeKind::Internal(_) => unreachable!(),
        };

        if var.0 >= var.1 {
            points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        } else {
            points.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap());
        }
        let mut group_b = points.split_off(SPLIT_SIZE);
        let mut group_a = points;

        let centroid_a = mean(&group_a.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
        let centroid_b = mean(&group_b.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
        let a_closer = sq_dist(centroid_a, old_centroid) <= sq_dist(centroid_b, old_centroid);

        if a_closer {
            group_a.push(new_point);
        } else {
            group_b.push(new_point);
        }
        let (primary, secondary) = if a_closer { (group_a, group_b) } else { (group_b, group_a) };

        self.nodes[leaf_id].kind = NodeKind::Leaf(primary);
        self.recompute_leaf_stats(leaf_id);

        let secondary_id = self.push_node(Node {
            parent: None,
            centroid: (0.0, 0.0),
            radius: 0.0,
            var: (0.0, 0.0),
            kind: NodeKind::Leaf(secondary),
        });
        self.recompute_leaf_stats(secondary_id);
        secondary_id
    }

    /// Splits a full internal node's existing children along its
    /// higher-variance axis, assigns `overflow` to whichever half's
    /// centroid is closer to the node's old centroid, keeps that half in
    /// place as `parent_id` and returns a freshly allocated node for the
    /// other half.
    fn split_internal_with_overflow(&mut self, parent_id: NodeId, overflow: NodeId) -> NodeId {
        let old_centroid = self.nodes[parent_id].centroid;
        let var = self.nodes[parent_id].var;
        let mut children = match &self.nodes[parent_id].kind {
            NodeKind::Internal(c) => c.clone(),
            NodeKind::Leaf(_) => unreachable!(),
        };

        if var.0 >= var.1 {
            children.sort_by(|&a, &b| self.nodes[a].centroid.0.partial_cmp(&self.nodes[b].centroid.0).unwrap());
        } else {
            children.sort_by(|&a, &b| self.nodes[a].centroid.1.partial_cmp(&self.nodes[b].centroid.1).unwrap());
        }
        let mut group_b = children.split_off(SPLIT_SIZE);
        let mut group_a = children;

        let centroid_a = mean(&group_a.iter().map(|&c| self.nodes[c].centroid).collect::<Vec<_>>());
        let centroid_b = mean(&group_b.iter().map(|&c| self.nodes[c].centroid).collect::<Vec<_>>());
        let a_closer = sq_dist(centroid_a, old_centroid) <= sq_dist(centroid_b, old_centroid);

        if a_closer {
            group_a.push(overflow);
        } else {
            group_b.push(overflow);
        }
        let (primary, secondary) = if a_closer { (group_a, group_b) } else { (group_b, group_a) };

        for &c in &primary {
            self.nodes[c].parent = Some(parent_id);
        }
        self.nodes[parent_id].kind = NodeKind::Internal(primary);
        self.recompute_internal_stats(parent_id);

        let secondary_id = self.push_node(Node {
            parent: None,
            centroid: (0.0, 0.0),
            radius: 0.0,
            var: (0.0, 0.0),
            kind: NodeKind::Internal(secondary.clone()),
        });
        for &c in &secondary {
            self.nodes[c].parent = Some(secondary_id);
        }
        self.recompute_internal_stats(secondary_id);
        secondary_id
    }
}

impl Default for SsTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_points(tree: &SsTree, id: NodeId, out: &mut Vec<u32>) {
        match tree.points(id) {
            Some(points) => out.extend(points.iter().map(|p| p.id)),
            None => {
                for &c in tree.children(id).unwrap() {
                    all_points(tree, c, out);
                }
            }
        }
    }

    fn radius_bound_holds(tree: &SsTree, id: NodeId) -> bool {
        let (cx, cy) = tree.centroid(id);
        let r = tree.radius(id);
        match tree.points(id) {
            Some(points) => points.iter().all(|p| p.distance(cx, cy) <= r + 1e-6),
            None => tree.children(id).unwrap().iter().all(|&c| {
                let (ccx, ccy) = tree.centroid(c);
                let d = ((ccx - cx).powi(2) + (ccy - cy).powi(2)).sqrt();
                d + tree.radius(c) <= r + 1e-6 && radius_bound_holds(tree, c)
            }),
        }
    }

    #[test]
    fn every_inserted_point_is_retrievable_and_bounded() {
        let mut tree = SsTree::new();
        for i in 0..200u32 {
            tree.insert(Topic::new(i, (i * 37 % 1000) as f64, (i * 53 % 1000) as f64));
        }
        let mut ids = Vec::new();
        all_points(&tree, tree.root(), &mut ids);
        ids.sort_unstable();
        assert_eq!(ids, (0..200).collect::<Vec<_>>());
        assert!(radius_bound_holds(&tree, tree.root()));
    }

    #[test]
    fn single_point_tree_has_zero_radius() {
        let mut tree = SsTree::new();
        tree.insert(Topic::new(1, 5.0, 5.0));
        assert_relative_eq!(tree.radius(tree.root()), 0.0);
        let (cx, cy) = tree.centroid(tree.root());
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cy, 5.0);
    }

    #[test]
    fn two_point_centroid_is_their_midpoint() {
        let mut tree = SsTree::new();
        tree.insert(Topic::new(1, 0.0, 0.0));
        tree.insert(Topic::new(2, 10.0, 0.0));
        let (cx, cy) = tree.centroid(tree.root());
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cy, 0.0);
        assert_relative_eq!(tree.radius(tree.root()), 5.0, epsilon = 1e-9);
    }
}
