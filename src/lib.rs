//! `strata` computes the strides of tensors: the number of elements to
//! skip in linear memory when the index of one axis increases by one.
//!
//! Strides are computed for the two usual layouts, column-major
//! (`FirstOrder`) and row-major (`LastOrder`), from shapes known at
//! runtime (`Strides`, `FixedRankStrides`) or at compile time thanks to
//! type level integers from the `typenum` crate (`StaticStrides`).
//!
//! ```
//! use strata::prelude::*;
//! use typenum::{U2, U3, U4};
//!
//! let runtime = Strides::<usize, RowMajor>::new(&[2, 3, 4]).unwrap();
//! let compile_time: StaticStrides<Shape3D<U2, U3, U4>, RowMajor> = StaticStrides::new();
//!
//! assert_eq!(runtime.as_slice(), &[12, 4, 1]);
//! assert_eq!(compile_time, runtime);
//! ```

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rayon::prelude::*;
    use typenum::{ATerm, U1, U2, U3, U4, U5, U7};

    /// All the shapes of the given rank whose extents are in `1..=max`.
    fn shapes(rank: usize, max: usize) -> Vec<Vec<usize>> {
        let mut shapes = vec![Vec::new()];
        for _ in 0..rank {
            shapes = shapes
                .into_iter()
                .flat_map(|shape| {
                    (1..=max).map(move |extent| {
                        let mut shape = shape.clone();
                        shape.push(extent);
                        shape
                    })
                })
                .collect();
        }

        shapes
    }

    macro_rules! assert_engines_agree {
        ($shape:ty, $layout:ty, $expected:expr) => {{
            let static_strides: StaticStrides<$shape, $layout> = StaticStrides::new();
            let extents = StaticExtents::<$shape>::new();
            let strides = Strides::<usize, $layout>::new(&extents.to_vec()).unwrap();

            assert_eq!(static_strides.to_vec(), $expected);
            assert_eq!(strides.as_slice(), &$expected[..]);
            assert_eq!(static_strides, strides);
            assert_eq!(StaticStrides::from_extents(&extents), static_strides);
        }};
    }

    #[test]
    fn first_order() {
        let strides = Strides::<usize, FirstOrder>::new(&[2, 3, 4]).unwrap();
        assert_eq!(strides.as_slice(), &[1, 2, 6]);

        let strides = FixedRankStrides::<usize, U3, FirstOrder>::new(&[2, 3, 4]).unwrap();
        assert_eq!(strides.as_slice(), &[1, 2, 6]);

        let strides: StaticStrides<Shape3D<U2, U3, U4>, FirstOrder> = StaticStrides::new();
        assert_eq!(strides.to_vec(), vec![1, 2, 6]);
    }

    #[test]
    fn last_order() {
        let strides = Strides::<usize, LastOrder>::new(&[2, 3, 4]).unwrap();
        assert_eq!(strides.as_slice(), &[12, 4, 1]);

        let strides = FixedRankStrides::<usize, U3, LastOrder>::new(&[2, 3, 4]).unwrap();
        assert_eq!(strides.as_slice(), &[12, 4, 1]);

        let strides: StaticStrides<Shape3D<U2, U3, U4>, LastOrder> = StaticStrides::new();
        assert_eq!(strides.to_vec(), vec![12, 4, 1]);
    }

    #[test]
    fn vector() {
        assert_eq!(Strides::<usize, FirstOrder>::new(&[5]).unwrap().as_slice(), &[1]);
        assert_eq!(Strides::<usize, LastOrder>::new(&[5]).unwrap().as_slice(), &[1]);
        assert_eq!(StaticStrides::<Shape1D<U5>, FirstOrder>::new().to_vec(), vec![1]);
        assert_eq!(StaticStrides::<Shape1D<U5>, LastOrder>::new().to_vec(), vec![1]);

        // Column and row vectors are vectors too, whatever the layout.
        assert_eq!(Strides::<usize, LastOrder>::new(&[1, 5]).unwrap().as_slice(), &[1, 1]);
        assert_eq!(Strides::<usize, FirstOrder>::new(&[5, 1, 1]).unwrap().as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn empty() {
        let strides = Strides::<usize, LastOrder>::new(&Vec::new()).unwrap();
        assert!(strides.is_empty());
        assert_eq!(strides.back(), None);

        let strides: StaticStrides<ATerm, FirstOrder> = StaticStrides::new();
        assert!(strides.is_empty());
        assert_eq!(strides.back(), None);
        assert_eq!(strides.iter().next(), None);
    }

    #[test]
    fn ones() {
        for layout_strides in &[
            Strides::<usize, FirstOrder>::new(&[1, 1]).unwrap().into_vec(),
            Strides::<usize, LastOrder>::new(&[1, 1]).unwrap().into_vec(),
            StaticStrides::<Shape2D<U1, U1>, FirstOrder>::new().to_vec(),
            StaticStrides::<Shape2D<U1, U1>, LastOrder>::new().to_vec(),
        ] {
            assert_eq!(layout_strides, &vec![1, 1]);
        }
    }

    #[test]
    fn degenerate_shapes_have_unit_strides() {
        for rank in 1..=4 {
            for shape in shapes(rank, 3) {
                if !(shape.is_vector() || shape.is_scalar()) {
                    continue;
                }
                let first = Strides::<usize, FirstOrder>::new(&shape).unwrap();
                let last = Strides::<usize, LastOrder>::new(&shape).unwrap();
                assert!(first.iter().all(|&s| s == 1), "{:?}", shape);
                assert!(last.iter().all(|&s| s == 1), "{:?}", shape);
            }
        }
    }

    #[test]
    fn cumulative_products() {
        for rank in 2..=4 {
            for shape in shapes(rank, 3) {
                if shape.is_vector() || shape.is_scalar() {
                    continue;
                }
                let first = Strides::<usize, FirstOrder>::new(&shape).unwrap();
                let last = Strides::<usize, LastOrder>::new(&shape).unwrap();
                assert_eq!(first.len(), rank);
                assert_eq!(last.len(), rank);

                assert_eq!(first[0], 1);
                for k in 1..rank {
                    assert_eq!(first[k], first[k - 1] * shape[k - 1], "{:?}", shape);
                    assert_eq!(Ok(first[k]), shape.product(0..k));
                }

                assert_eq!(last[rank - 1], 1);
                for k in (0..rank - 1).rev() {
                    assert_eq!(last[k], last[k + 1] * shape[k + 1], "{:?}", shape);
                    assert_eq!(Ok(last[k]), shape.product(k + 1..rank));
                }
            }
        }
    }

    #[test]
    fn offsets_cover_storage() {
        let shape = [2_usize, 3, 4];
        let last = Strides::<usize, LastOrder>::new(&shape).unwrap();
        let first = Strides::<usize, FirstOrder>::new(&shape).unwrap();

        // Row-major offsets grow with the rightmost index varying fastest,
        // column-major ones with the leftmost index varying fastest.
        let mut expected = 0;
        for i in 0..shape[0] {
            for j in 0..shape[1] {
                for k in 0..shape[2] {
                    assert_eq!(i * last[0] + j * last[1] + k * last[2], expected);
                    expected += 1;
                }
            }
        }

        let mut expected = 0;
        for k in 0..shape[2] {
            for j in 0..shape[1] {
                for i in 0..shape[0] {
                    assert_eq!(i * first[0] + j * first[1] + k * first[2], expected);
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn engines_agree() {
        assert_engines_agree!(Shape3D<U2, U3, U4>, FirstOrder, vec![1, 2, 6]);
        assert_engines_agree!(Shape3D<U2, U3, U4>, LastOrder, vec![12, 4, 1]);
        assert_engines_agree!(Shape2D<U7, U5>, ColumnMajor, vec![1, 7]);
        assert_engines_agree!(Shape2D<U7, U5>, RowMajor, vec![5, 1]);
        assert_engines_agree!(Shape2D<U1, U5>, RowMajor, vec![1, 1]);
        assert_engines_agree!(Shape3D<U5, U1, U1>, FirstOrder, vec![1, 1, 1]);
        assert_engines_agree!(Shape3D<U4, U1, U3>, FirstOrder, vec![1, 4, 4]);
        assert_engines_agree!(Shape3D<U4, U1, U3>, LastOrder, vec![3, 3, 1]);
        assert_engines_agree!(Shape3D<U1, U1, U4>, LastOrder, vec![4, 4, 1]);
        assert_engines_agree!(Shape3D<U1, U1, U1>, LastOrder, vec![1, 1, 1]);
        assert_engines_agree!(Shape4D<U2, U3, U4, U5>, FirstOrder, vec![1, 2, 6, 24]);
        assert_engines_agree!(Shape4D<U2, U3, U4, U5>, LastOrder, vec![60, 20, 5, 1]);
        assert_engines_agree!(Shape6D<U2, U2, U2, U2, U2, U3>, LastOrder, vec![48, 24, 12, 6, 3, 1]);

        let fixed = FixedRankStrides::<usize, U4, LastOrder>::new(&[2, 3, 4, 5]).unwrap();
        assert_eq!(StaticStrides::<Shape4D<U2, U3, U4, U5>, LastOrder>::new(), fixed);
    }

    #[test]
    fn static_predicates_agree() {
        let shapes = [
            (StaticExtents::<Shape2D<U1, U5>>::new().to_vec(), StaticExtents::<Shape2D<U1, U5>>::new().is_vector()),
            (StaticExtents::<Shape2D<U7, U5>>::new().to_vec(), StaticExtents::<Shape2D<U7, U5>>::new().is_vector()),
            (StaticExtents::<Shape3D<U5, U1, U1>>::new().to_vec(), StaticExtents::<Shape3D<U5, U1, U1>>::new().is_vector()),
            (StaticExtents::<Shape3D<U4, U1, U3>>::new().to_vec(), StaticExtents::<Shape3D<U4, U1, U3>>::new().is_vector()),
            (StaticExtents::<Shape1D<U1>>::new().to_vec(), StaticExtents::<Shape1D<U1>>::new().is_vector()),
        ];
        for (extents, is_vector) in shapes.iter() {
            assert_eq!(extents.is_vector(), *is_vector, "{:?}", extents);
        }
    }

    #[test]
    fn static_read_access() {
        let strides: StaticStrides<Shape3D<U2, U3, U4>, LastOrder> = StaticStrides::new();
        assert_eq!(strides.rank(), 3);
        assert_eq!(strides[1], 4);
        assert_eq!(strides.at(2), Ok(1));
        assert_eq!(strides.at(3), Err(StridesError::OutOfRange { index: 3, rank: 3 }));
        assert_eq!(strides.get(3), None);
        assert_eq!(strides.back(), Some(1));
        assert_eq!(strides.iter().rev().collect::<Vec<_>>(), vec![1, 4, 12]);
        assert_eq!(strides.iter().len(), 3);
        assert_eq!((&strides).into_iter().sum::<usize>(), 17);
        assert_eq!(strides.layout(), Order::Last);
        assert_eq!(strides.to_dyn().as_slice(), &[12, 4, 1]);
        assert_eq!(format!("{:?}", strides), "StaticStrides { layout: Last, strides: [12, 4, 1] }");
        assert_eq!(std::mem::size_of::<StaticStrides<Shape3D<U2, U3, U4>, LastOrder>>(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn static_index_out_of_range() {
        let strides: StaticStrides<Shape2D<U2, U3>, FirstOrder> = StaticStrides::new();
        let stride: usize = strides[2];
        assert_eq!(stride, 0);
    }

    #[test]
    fn clone_round_trip() {
        let strides = Strides::<u32, LastOrder>::new(&[3, 5, 7, 2]).unwrap();
        let copy = strides.clone();
        assert_eq!(copy, strides);
        for k in 0..strides.rank() {
            assert_eq!(copy.at(k), strides.at(k));
        }

        let fixed = FixedRankStrides::<u32, U4, FirstOrder>::new(&[3, 5, 7, 2]).unwrap();
        let copy = fixed.clone();
        assert_eq!(copy.iter().collect::<Vec<_>>(), fixed.iter().collect::<Vec<_>>());
    }

    #[test]
    fn rank_mismatch() {
        assert_eq!(
            FixedRankStrides::<usize, U2, FirstOrder>::new(&[2, 3, 4]),
            Err(StridesError::LengthMismatch { expected: 2, got: 3 })
        );
        assert_eq!(
            FixedRankStrides::<usize, U4, LastOrder>::new(&[2, 3, 4]),
            Err(StridesError::LengthMismatch { expected: 4, got: 3 })
        );
    }

    #[test]
    fn concurrent_reads() {
        let strides = Strides::<usize, RowMajor>::new(&[2, 3, 4]).unwrap();
        let fixed = FixedRankStrides::<usize, U3, ColumnMajor>::new(&[2, 3, 4]).unwrap();

        let offsets: Vec<usize> = (0..24_usize)
            .into_par_iter()
            .map(|n| {
                let index = [n / 12, (n / 4) % 3, n % 4];
                index.iter().zip(strides.iter()).map(|(i, s)| i * s).sum()
            })
            .collect();
        assert_eq!(offsets, (0..24).collect::<Vec<_>>());

        assert!((0..64_usize)
            .into_par_iter()
            .all(|n| fixed[n % 3] == [1, 2, 6][n % 3]));
    }
}

pub mod error;
pub mod extent;
pub mod prelude;
pub mod strides;
