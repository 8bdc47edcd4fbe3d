//! Seitentabelle räumlich gekoppelter Knoten (auch kurvenübergreifend).

use super::KnotRef;

/// Menge von Link-Gruppen. Jeder Knoten gehört höchstens einer Gruppe an,
/// Gruppen mit weniger als zwei Knoten werden verworfen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnotLinkCollection {
    links: Vec<Vec<KnotRef>>,
}

impl KnotLinkCollection {
    /// Erstellt eine leere Link-Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Link-Gruppen.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Gibt `true` zurück, wenn keine Links existieren.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn group_of(&self, knot: KnotRef) -> Option<usize> {
        self.links.iter().position(|group| group.contains(&knot))
    }

    /// Koppelt zwei Knoten. Gehören beide bereits Gruppen an, werden diese vereinigt.
    pub fn link(&mut self, a: KnotRef, b: KnotRef) {
        if a == b {
            return;
        }
        match (self.group_of(a), self.group_of(b)) {
            (Some(ga), Some(gb)) if ga == gb => {}
            (Some(ga), Some(gb)) => {
                let (keep, merge) = if ga < gb { (ga, gb) } else { (gb, ga) };
                let merged = self.links.remove(merge);
                self.links[keep].extend(merged);
            }
            (Some(ga), None) => self.links[ga].push(b),
            (None, Some(gb)) => self.links[gb].push(a),
            (None, None) => self.links.push(vec![a, b]),
        }
    }

    /// Löst einen Knoten aus seiner Gruppe.
    pub fn unlink(&mut self, knot: KnotRef) -> bool {
        let Some(group) = self.group_of(knot) else {
            return false;
        };
        self.links[group].retain(|k| *k != knot);
        self.drop_trivial_groups();
        true
    }

    /// Alle mit `knot` gekoppelten Knoten (ohne `knot` selbst).
    pub fn linked_knots(&self, knot: KnotRef) -> Vec<KnotRef> {
        self.group_of(knot)
            .map(|group| {
                self.links[group]
                    .iter()
                    .copied()
                    .filter(|k| *k != knot)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Prüft ob zwei Knoten derselben Gruppe angehören.
    pub fn are_linked(&self, a: KnotRef, b: KnotRef) -> bool {
        a != b && self.group_of(a).is_some_and(|group| self.links[group].contains(&b))
    }

    /// Verschiebt Indizes nach dem Einfügen eines Knotens in `curve` an `index`.
    pub fn knot_inserted(&mut self, curve: usize, index: usize) {
        for knot in self.links.iter_mut().flatten() {
            if knot.curve == curve && knot.knot >= index {
                knot.knot += 1;
            }
        }
    }

    /// Entfernt Referenzen auf einen gelöschten Knoten und verschiebt die übrigen Indizes.
    pub fn knot_removed(&mut self, curve: usize, index: usize) {
        for group in &mut self.links {
            group.retain(|k| !(k.curve == curve && k.knot == index));
            for knot in group.iter_mut() {
                if knot.curve == curve && knot.knot > index {
                    knot.knot -= 1;
                }
            }
        }
        self.drop_trivial_groups();
    }

    /// Entfernt Referenzen auf eine gelöschte Kurve und verschiebt die übrigen Kurven-Indizes.
    pub fn curve_removed(&mut self, curve: usize) {
        for group in &mut self.links {
            group.retain(|k| k.curve != curve);
            for knot in group.iter_mut() {
                if knot.curve > curve {
                    knot.curve -= 1;
                }
            }
        }
        self.drop_trivial_groups();
    }

    fn drop_trivial_groups(&mut self) {
        self.links.retain(|group| group.len() > 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(curve: usize, knot: usize) -> KnotRef {
        KnotRef::new(curve, knot)
    }

    #[test]
    fn link_vereinigt_gruppen() {
        let mut links = KnotLinkCollection::new();
        links.link(k(0, 0), k(1, 0));
        links.link(k(2, 3), k(3, 1));
        assert_eq!(links.len(), 2);

        links.link(k(1, 0), k(3, 1));
        assert_eq!(links.len(), 1);
        assert!(links.are_linked(k(0, 0), k(2, 3)));
        assert_eq!(links.linked_knots(k(0, 0)).len(), 3);
    }

    #[test]
    fn unlink_verwirft_einzelgruppen() {
        let mut links = KnotLinkCollection::new();
        links.link(k(0, 0), k(1, 0));
        assert!(links.unlink(k(0, 0)));
        assert!(links.is_empty());
        assert!(!links.unlink(k(0, 0)));
    }

    #[test]
    fn indizes_werden_bei_einfuegen_verschoben() {
        let mut links = KnotLinkCollection::new();
        links.link(k(0, 2), k(1, 0));
        links.knot_inserted(0, 1);
        assert!(links.are_linked(k(0, 3), k(1, 0)));
        links.knot_inserted(1, 0);
        assert!(links.are_linked(k(0, 3), k(1, 1)));
    }

    #[test]
    fn entfernen_loest_link_und_verschiebt() {
        let mut links = KnotLinkCollection::new();
        links.link(k(0, 1), k(1, 4));
        links.link(k(0, 3), k(2, 0));
        links.knot_removed(0, 1);
        assert_eq!(links.len(), 1);
        assert!(links.are_linked(k(0, 2), k(2, 0)));
    }

    #[test]
    fn kurve_entfernen_verschiebt_kurvenindizes() {
        let mut links = KnotLinkCollection::new();
        links.link(k(0, 0), k(2, 0));
        links.link(k(1, 0), k(2, 1));
        links.curve_removed(1);
        assert_eq!(links.len(), 1);
        assert!(links.are_linked(k(0, 0), k(1, 0)));
    }
}
