#[cfg(test)]
mod tests {
    use plotpack::entities::{Block, BuildingFact, BuildingKind, PackInstance, Placement};
    use plotpack::geometry::geo_enums::{GeoRelation, Orientation};
    use plotpack::geometry::{FreeRectTree, Rect};
    use plotpack::io::ext_repr::{ExtBlock, ExtBuilding};
    use plotpack::io::import;
    use plotpack::util::assertions;
    use test_case::test_case;

    #[test]
    fn tree_split_geometry() {
        let mut tree = FreeRectTree::new(100.0, 60.0);
        assert_eq!(tree.insert(60.0, 40.0), Some((0.0, 0.0)));

        let root = tree.node(tree.root());
        let [down, right] = root.children.unwrap();
        let (down, right) = (tree.node(down), tree.node(right));

        assert_eq!((down.x, down.y, down.width, down.height), (0.0, 40.0, 100.0, 20.0));
        assert_eq!((right.x, right.y, right.width, right.height), (60.0, 0.0, 40.0, 40.0));
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.free_area(), 100.0 * 60.0 - 60.0 * 40.0);
    }

    #[test]
    fn tree_search_prefers_down() {
        let mut tree = FreeRectTree::new(100.0, 100.0);
        tree.insert(50.0, 50.0).unwrap();
        // both `down` (0, 50, 100x50) and `right` (50, 0, 50x50) can hold it
        assert_eq!(tree.insert(20.0, 20.0), Some((0.0, 50.0)));
        // only `right` is wide enough at full height
        assert_eq!(tree.insert(50.0, 50.0), Some((50.0, 0.0)));
    }

    #[test]
    fn tree_rejects_oversized() {
        let mut tree = FreeRectTree::new(100.0, 100.0);
        assert_eq!(tree.insert(100.1, 10.0), None);
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.insert(100.0, 100.0), Some((0.0, 0.0)));
        assert_eq!(tree.insert(1.0, 1.0), None);
        assert_eq!(tree.free_nodes().map(|n| n.area()).sum::<f32>(), 0.0);
    }

    #[test]
    fn tree_area_conserved() {
        let mut tree = FreeRectTree::new(100.0, 60.0);
        let dims = [(60.0, 40.0), (40.0, 40.0), (50.0, 20.0), (30.0, 20.0)];
        let placements = dims
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| {
                let (x, y) = tree.insert(w, h).unwrap();
                Placement {
                    title: format!("b{i}"),
                    indent: 0.0,
                    width: w,
                    height: h,
                    x,
                    y,
                    rotated: false,
                }
            })
            .collect::<Vec<_>>();

        assert!(assertions::tree_area_is_conserved(&tree, &placements));
        assert!(assertions::placements_are_disjoint(&placements));
        assert!(assertions::placements_within_plot(
            &placements,
            Rect::try_new(0.0, 0.0, 100.0, 60.0).unwrap()
        ));
    }

    #[test_case((0.0, 0.0, 10.0, 10.0), (10.0, 0.0, 20.0, 10.0), GeoRelation::Disjoint; "touching edges")]
    #[test_case((0.0, 0.0, 10.0, 10.0), (5.0, 5.0, 15.0, 15.0), GeoRelation::Intersecting; "overlapping")]
    #[test_case((0.0, 0.0, 10.0, 10.0), (2.0, 2.0, 8.0, 8.0), GeoRelation::Surrounding; "surrounding")]
    #[test_case((2.0, 2.0, 8.0, 8.0), (0.0, 0.0, 10.0, 10.0), GeoRelation::Enclosed; "enclosed")]
    fn rect_relation(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32), expected: GeoRelation) {
        let a = Rect::try_new(a.0, a.1, a.2, a.3).unwrap();
        let b = Rect::try_new(b.0, b.1, b.2, b.3).unwrap();
        assert_eq!(a.almost_relation_to(b), expected);
        assert_eq!(
            a.almost_overlaps(&b),
            expected != GeoRelation::Disjoint,
            "overlap should agree with the relation"
        );
    }

    #[test]
    fn rect_rejects_degenerate() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 10.0, f32::NAN).is_err());
        assert!(Rect::from_corner(5.0, 5.0, 10.0, 20.0).is_ok());
    }

    #[test]
    fn building_footprint() {
        let b = BuildingFact::try_new("school", 20.0, 10.0, 1.0, 300.0, 0.0, BuildingKind::Required).unwrap();
        assert_eq!(b.footprint_width(), 22.0);
        assert_eq!(b.footprint_height(), 12.0);
        assert_eq!(b.area_with_indent(), 264.0);

        let block = b.to_block();
        assert_eq!((block.width, block.height, block.indent), (22.0, 12.0, 1.0));
        assert!(block.rotatable);
        assert_eq!(block.dims(Orientation::Rotated), (12.0, 22.0));
    }

    #[test]
    fn square_block_is_not_rotatable() {
        let block = Block::try_new("kiosk", 6.0, 6.0, 0.5).unwrap();
        assert!(!block.rotatable);
        assert_eq!(block.orientations(), &[Orientation::Original]);
        assert_eq!(block.area(), 49.0);
    }

    #[test]
    fn rotated_block_fits() {
        let block = Block::try_new("long", 50.0, 100.0, 0.0).unwrap();
        assert!(block.fits_within(100.0, 50.0));
        assert!(!block.clone().with_fixed_orientation().fits_within(100.0, 50.0));
    }

    #[test]
    fn placement_body() {
        let placement = Placement {
            title: "a".into(),
            indent: 2.0,
            width: 14.0,
            height: 10.0,
            x: 5.0,
            y: 5.0,
            rotated: false,
        };
        let body = placement.body().unwrap();
        assert_eq!((body.x_min, body.y_min, body.x_max, body.y_max), (7.0, 7.0, 17.0, 13.0));

        let fixed = placement.to_fixed_block();
        assert!(!fixed.rotatable);
        assert_eq!((fixed.width, fixed.height), (14.0, 10.0));
    }

    fn ext_building(kind: BuildingKind) -> ExtBuilding {
        ExtBuilding {
            title: "apartment".into(),
            width: 10.0,
            height: 8.0,
            indent: 1.0,
            price_to_build: 100.0,
            profit: 30.0,
            kind,
        }
    }

    #[test_case(|b| b.title = "  ".into(); "empty title")]
    #[test_case(|b| b.width = 0.0; "zero width")]
    #[test_case(|b| b.height = -3.0; "negative height")]
    #[test_case(|b| b.indent = -1.0; "negative indent")]
    #[test_case(|b| b.price_to_build = 0.0; "free apartment")]
    #[test_case(|b| b.price_to_build = f64::NAN; "nan price")]
    #[test_case(|b| b.profit = f64::INFINITY; "infinite profit")]
    fn import_rejects_malformed(corrupt: fn(&mut ExtBuilding)) {
        let mut building = ext_building(BuildingKind::Apartment);
        corrupt(&mut building);
        let buildings = vec![ext_building(BuildingKind::Shop), building];
        let err = import::import_knapsack_instance(1000.0, 500.0, &buildings).unwrap_err();
        assert!(format!("{err:#}").contains("index 1"), "{err:#}");
    }

    #[test]
    fn import_accepts_free_required_building() {
        let mut building = ext_building(BuildingKind::Required);
        building.price_to_build = 0.0;
        assert!(import::import_building(&building).is_ok());
    }

    #[test_case(-1.0, 100.0; "negative capacity")]
    #[test_case(1000.0, -0.5; "negative budget")]
    #[test_case(f32::INFINITY, 100.0; "infinite capacity")]
    fn import_rejects_invalid_scalars(capacity: f32, budget: f64) {
        let buildings = vec![ext_building(BuildingKind::Apartment)];
        assert!(import::import_knapsack_instance(capacity, budget, &buildings).is_err());
    }

    #[test]
    fn import_blocks() {
        let json = r#"[
            {"title": "a", "width": 10, "height": 20},
            {"title": "b", "width": 10, "height": 20, "indent": 1, "rotatable": false},
            {"title": "c", "width": 5, "height": 5}
        ]"#;
        let ext_blocks: Vec<ExtBlock> = serde_json::from_str(json).unwrap();
        let instance = import::import_pack_instance(100.0, 50.0, &ext_blocks).unwrap();

        assert_eq!(instance.blocks.len(), 3);
        assert!(instance.blocks[0].rotatable);
        assert!(!instance.blocks[1].rotatable);
        assert_eq!((instance.blocks[1].width, instance.blocks[1].height), (12.0, 22.0));
        assert!(!instance.blocks[2].rotatable);
        assert_eq!(instance.block_area(), 200.0 + 264.0 + 25.0);
    }

    #[test_case(0.0, 50.0; "zero width")]
    #[test_case(100.0, -50.0; "negative height")]
    fn import_rejects_invalid_plot(width: f32, height: f32) {
        assert!(PackInstance::try_new(width, height, vec![]).is_err());
        assert!(import::import_pack_instance(width, height, &[]).is_err());
    }

    #[test]
    fn building_json_defaults() {
        let json = r#"{"title": "shop", "width": 6, "height": 6, "price_to_build": 50, "profit": 15, "kind": "shop"}"#;
        let ext: ExtBuilding = serde_json::from_str(json).unwrap();
        assert_eq!(ext.indent, 0.0);
        assert_eq!(ext.kind, BuildingKind::Shop);
        let building = import::import_building(&ext).unwrap();
        assert_eq!(building.kind.repeat_cap(), Some(1));
    }
}
