//! Uni-directional edges: a cell index in edge mode with the
//! origin-to-neighbor direction stored in the reserved bits.

use crate::cell::convert::cell_to_face_ijk;
use crate::constants::{CELL_MODE, EDGE_MODE};
use crate::coords::face::{face_ijk_pent_to_boundary, face_ijk_to_boundary};
use crate::error::GridError;
use crate::traverse::are_neighbors;
use crate::traverse::neighbor::neighbor_rotations;
use crate::types::{CellIndex, Direction, GeoBoundary, NULL_CELL};
use crate::vertex::{vertex_num_for_direction, INVALID_VERTEX_NUM};

/// The edge from `origin` to its neighbor `destination`. Fails with
/// [`GridError::NotNeighbors`] when the cells do not share an edge.
pub fn get_edge(origin: CellIndex, destination: CellIndex) -> Result<CellIndex, GridError> {
  if !are_neighbors(origin, destination) {
    return Err(GridError::NotNeighbors);
  }

  let mut edge = origin;
  edge.set_mode(EDGE_MODE);

  // probe each direction for the one that lands on the destination;
  // pentagons skip the deleted K direction
  let start: u8 = if origin.is_pentagon() {
    Direction::J as u8
  } else {
    Direction::K as u8
  };

  for dir in start..=Direction::Ij as u8 {
    let dir = Direction::try_from(dir).unwrap_or(Direction::Invalid);
    let mut rotations = 0;
    if let Ok(neighbor) = neighbor_rotations(origin, dir, &mut rotations) {
      if neighbor == destination {
        edge.set_reserved(dir as i32);
        return Ok(edge);
      }
    }
  }

  // unreachable when are_neighbors held; tables would have to be wrong
  Err(GridError::Failed)
}

/// The origin cell of an edge.
pub fn edge_origin(edge: CellIndex) -> Result<CellIndex, GridError> {
  if edge.mode() != EDGE_MODE {
    return Err(GridError::EdgeInvalid);
  }
  let mut origin = edge;
  origin.set_mode(CELL_MODE);
  origin.set_reserved(0);
  Ok(origin)
}

/// The destination cell of an edge.
pub fn edge_destination(edge: CellIndex) -> Result<CellIndex, GridError> {
  let direction = Direction::try_from(edge.reserved() as u8).map_err(|_| GridError::EdgeInvalid)?;
  let origin = edge_origin(edge)?;

  let mut rotations = 0;
  neighbor_rotations(origin, direction, &mut rotations)
}

/// Both endpoint cells of an edge, origin first.
pub fn edge_cells(edge: CellIndex) -> Result<(CellIndex, CellIndex), GridError> {
  Ok((edge_origin(edge)?, edge_destination(edge)?))
}

/// Whether the index is a valid uni-directional edge: edge mode, a
/// traversable direction (never K off a pentagon) and a valid origin.
#[must_use]
pub fn edge_is_valid(edge: CellIndex) -> bool {
  if edge.mode() != EDGE_MODE {
    return false;
  }

  let direction = edge.reserved();
  if direction < Direction::K as i32 || direction > Direction::Ij as i32 {
    return false;
  }

  let origin = match edge_origin(edge) {
    Ok(origin) => origin,
    Err(_) => return false,
  };
  if origin.is_pentagon() && direction == Direction::K as i32 {
    return false;
  }

  origin.is_valid()
}

/// All edges leading out of the cell. Hexagons yield six; pentagons
/// yield five with the first slot null.
pub fn edges_from_cell(origin: CellIndex) -> Result<[CellIndex; 6], GridError> {
  if !origin.is_valid() {
    return Err(GridError::CellInvalid);
  }

  let is_pentagon = origin.is_pentagon();
  let mut edges = [NULL_CELL; 6];

  for (i, edge) in edges.iter_mut().enumerate() {
    if is_pentagon && i == 0 {
      continue;
    }
    let mut e = origin;
    e.set_mode(EDGE_MODE);
    e.set_reserved(i as i32 + 1);
    *edge = e;
  }
  Ok(edges)
}

/// The boundary of an edge: its two topological vertices, plus a
/// distortion vertex when the edge crosses an icosahedron edge.
pub fn edge_boundary(edge: CellIndex) -> Result<GeoBoundary, GridError> {
  if !edge_is_valid(edge) {
    return Err(GridError::EdgeInvalid);
  }

  let direction = Direction::try_from(edge.reserved() as u8).map_err(|_| GridError::EdgeInvalid)?;
  let origin = edge_origin(edge)?;

  let start_vertex = vertex_num_for_direction(origin, direction);
  if start_vertex == INVALID_VERTEX_NUM {
    return Err(GridError::EdgeInvalid);
  }

  let fijk = cell_to_face_ijk(origin);
  let res = origin.resolution();

  let boundary = if origin.is_pentagon() {
    face_ijk_pent_to_boundary(&fijk, res, start_vertex as usize, 2)
  } else {
    face_ijk_to_boundary(&fijk, res, start_vertex as usize, 2)
  };
  Ok(boundary)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::codec::make_cell;
  use crate::cell::{cell_to_boundary, geo_to_cell};
  use crate::geom::geodesy::{degs_to_rads, geo_almost_equal};
  use crate::traverse::k_ring;
  use crate::types::GeoCoord;

  fn sample_cell(res: i32) -> CellIndex {
    let p = GeoCoord {
      lat: degs_to_rads(37.779),
      lon: degs_to_rads(-122.419),
    };
    geo_to_cell(&p, res).unwrap()
  }

  #[test]
  fn edge_round_trips_endpoints() {
    let origin = sample_cell(9);
    for cell in k_ring(origin, 1).unwrap() {
      if cell == origin {
        continue;
      }
      let edge = get_edge(origin, cell).unwrap();
      assert!(edge_is_valid(edge));
      assert_eq!(edge_origin(edge).unwrap(), origin);
      assert_eq!(edge_destination(edge).unwrap(), cell);
      assert_eq!(edge_cells(edge).unwrap(), (origin, cell));
    }
  }

  #[test]
  fn non_neighbors_make_no_edge() {
    let origin = sample_cell(8);
    assert_eq!(get_edge(origin, origin), Err(GridError::NotNeighbors));

    let far = geo_to_cell(
      &GeoCoord {
        lat: degs_to_rads(48.86),
        lon: degs_to_rads(2.35),
      },
      8,
    )
    .unwrap();
    assert_eq!(get_edge(origin, far), Err(GridError::NotNeighbors));
  }

  #[test]
  fn hexagon_yields_six_edges() {
    let origin = sample_cell(7);
    let edges = edges_from_cell(origin).unwrap();
    for edge in edges {
      assert!(edge_is_valid(edge));
      assert_eq!(edge_origin(edge).unwrap(), origin);
      let dest = edge_destination(edge).unwrap();
      assert!(are_neighbors(origin, dest));
    }
  }

  #[test]
  fn pentagon_yields_five_edges() {
    let pent = make_cell(4, 49, Direction::Center);
    let edges = edges_from_cell(pent).unwrap();
    assert_eq!(edges[0], NULL_CELL, "the deleted K slot stays empty");
    for edge in &edges[1..] {
      assert!(edge_is_valid(*edge));
      assert_eq!(edge_origin(*edge).unwrap(), pent);
    }
  }

  #[test]
  fn invalid_edges_rejected() {
    // a cell is not an edge
    assert!(!edge_is_valid(sample_cell(5)));
    assert!(edge_origin(sample_cell(5)).is_err());

    // direction zero is not an edge direction
    let mut bad = sample_cell(5);
    bad.set_mode(EDGE_MODE);
    bad.set_reserved(0);
    assert!(!edge_is_valid(bad));
    bad.set_reserved(7);
    assert!(!edge_is_valid(bad));

    // K edge off a pentagon
    let mut pent_edge = make_cell(2, 4, Direction::Center);
    pent_edge.set_mode(EDGE_MODE);
    pent_edge.set_reserved(Direction::K as i32);
    assert!(!edge_is_valid(pent_edge));
  }

  #[test]
  fn edge_boundary_lies_on_cell_boundary() {
    let origin = sample_cell(6);
    let cell_bound = cell_to_boundary(origin).unwrap();

    for edge in edges_from_cell(origin).unwrap() {
      let b = edge_boundary(edge).unwrap();
      assert!(b.num_verts == 2 || b.num_verts == 3, "two endpoints plus at most one distortion");

      // both topological endpoints appear among the cell's vertices
      for v in [&b.verts[0], &b.verts[b.num_verts - 1]] {
        assert!(
          cell_bound.verts[..cell_bound.num_verts].iter().any(|cv| geo_almost_equal(cv, v)),
          "edge endpoint missing from the cell boundary"
        );
      }
    }
  }

  #[test]
  fn every_cell_edge_is_covered_once() {
    // collecting the destination of every edge of every ring-1 cell
    // sees the origin exactly six times
    let origin = sample_cell(8);
    let mut inbound = 0;
    for cell in k_ring(origin, 1).unwrap() {
      if cell == origin {
        continue;
      }
      for edge in edges_from_cell(cell).unwrap() {
        if edge == NULL_CELL {
          continue;
        }
        if edge_destination(edge).unwrap() == origin {
          inbound += 1;
        }
      }
    }
    assert_eq!(inbound, 6);
  }
}
