use std::fmt::Display;

use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::Instance;
use crate::util::assertions;

/// Assignment of machines to locations.
///
/// Represented as a sequence of machine ids where the position in the sequence is the id of the
/// assigned location: `order[p] = m` places machine `m` on location `p`.
/// Every machine appears exactly once, so a layout of `n` machines occupies locations `0..n`
/// of the canonical location order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    order: Vec<usize>,
}

impl Layout {
    /// Creates a layout from a machine order, checking that it is a permutation of `0..n_machines`.
    pub fn try_new(order: Vec<usize>, n_machines: usize) -> Result<Self> {
        ensure!(
            order.len() == n_machines,
            "layout places {} machines, expected {n_machines}",
            order.len()
        );
        if let Some(dup) = order.iter().duplicates().next() {
            anyhow::bail!("machine id {dup} appears more than once in the layout");
        }
        if let Some(oob) = order.iter().find(|m| **m >= n_machines) {
            anyhow::bail!("machine id {oob} is out of range (0..{n_machines})");
        }
        Ok(Self { order })
    }

    /// Layout placing machine `i` on location `i`.
    pub fn identity(n_machines: usize) -> Self {
        Self {
            order: (0..n_machines).collect(),
        }
    }

    /// Creates a layout from machine names, in position order.
    pub fn from_names<S: AsRef<str>>(
        instance: &Instance,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let order = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                instance
                    .machine_id(name)
                    .with_context(|| format!("unknown machine in layout: {name:?}"))
            })
            .collect::<Result<Vec<usize>>>()?;
        Self::try_new(order, instance.n_machines())
    }

    /// Machine placed at location `pos`
    pub fn machine_at(&self, pos: usize) -> usize {
        self.order[pos]
    }

    /// Inverse view of the layout: `positions()[m]` is the location of machine `m`.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions = vec![0; self.order.len()];
        for (pos, &m) in self.order.iter().enumerate() {
            positions[m] = pos;
        }
        positions
    }

    /// Exchanges the machines at locations `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
        debug_assert!(assertions::layout_is_bijection(self));
    }

    /// Copy of this layout with the machines at locations `i` and `j` exchanged.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut candidate = self.clone();
        candidate.swap(i, j);
        candidate
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Machine names in position order
    pub fn machine_names<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = &'a str> {
        self.order
            .iter()
            .map(|m| instance.machine(*m).name.as_str())
    }

    /// Wraps the layout for printing with the names of the machines
    pub fn display<'a>(&'a self, instance: &'a Instance) -> LayoutDisplay<'a> {
        LayoutDisplay {
            layout: self,
            instance,
        }
    }
}

pub struct LayoutDisplay<'a> {
    layout: &'a Layout,
    instance: &'a Instance,
}

impl Display for LayoutDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.layout.machine_names(self.instance).join(", ")
        )
    }
}
