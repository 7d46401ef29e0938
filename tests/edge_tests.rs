//! Uni-directional edge laws.

use heptile::{
  are_neighbors, degs_to_rads, edge_boundary, edge_destination, edge_is_valid, edge_origin, edges_from_cell,
  geo_to_cell, get_edge, k_ring, GeoCoord, GridError, NULL_CELL,
};

fn osaka_cell(res: i32) -> heptile::CellIndex {
  let p = GeoCoord {
    lat: degs_to_rads(34.69),
    lon: degs_to_rads(135.5),
  };
  geo_to_cell(&p, res).unwrap()
}

#[test]
fn edge_endpoints_round_trip() {
  let origin = osaka_cell(9);
  for neighbor in k_ring(origin, 1).unwrap() {
    if neighbor == origin {
      continue;
    }
    let edge = get_edge(origin, neighbor).unwrap();
    assert!(edge_is_valid(edge));
    assert_eq!(edge_origin(edge).unwrap(), origin);
    assert_eq!(edge_destination(edge).unwrap(), neighbor);
  }
}

#[test]
fn edges_exist_exactly_for_neighbors() {
  let origin = osaka_cell(7);
  for cell in k_ring(origin, 2).unwrap() {
    let edge = get_edge(origin, cell);
    if are_neighbors(origin, cell) {
      assert!(edge.is_ok(), "neighbor {cell} should have an edge");
    } else {
      assert_eq!(edge, Err(GridError::NotNeighbors), "non-neighbor {cell}");
    }
  }
}

#[test]
fn hexagon_cells_have_six_edges() {
  let origin = osaka_cell(8);
  let edges = edges_from_cell(origin).unwrap();
  assert_eq!(edges.iter().filter(|&&e| e != NULL_CELL).count(), 6);

  let mut destinations = Vec::new();
  for edge in edges {
    assert!(edge_is_valid(edge));
    let dest = edge_destination(edge).unwrap();
    assert!(are_neighbors(origin, dest));
    assert!(!destinations.contains(&dest));
    destinations.push(dest);
  }
}

#[test]
fn pentagon_cells_have_five_edges() {
  for pent in heptile::pentagons(3).unwrap() {
    let edges = edges_from_cell(pent).unwrap();
    assert_eq!(edges[0], NULL_CELL, "K slot of pentagon {pent} is null");
    assert_eq!(edges.iter().filter(|&&e| e != NULL_CELL).count(), 5);
    for edge in &edges[1..] {
      assert!(edge_is_valid(*edge));
    }
  }
}

#[test]
fn edge_boundaries_have_two_or_three_vertices() {
  for res in [2, 3, 8, 9] {
    let origin = osaka_cell(res);
    for edge in edges_from_cell(origin).unwrap() {
      let boundary = edge_boundary(edge).unwrap();
      assert!(
        boundary.num_verts == 2 || boundary.num_verts == 3,
        "res {res}: {} verts",
        boundary.num_verts
      );
    }
  }
}

#[test]
fn pentagon_edge_boundaries() {
  for pent in heptile::pentagons(3).unwrap() {
    for edge in edges_from_cell(pent).unwrap() {
      if edge == NULL_CELL {
        continue;
      }
      let boundary = edge_boundary(edge).unwrap();
      // Class III pentagon edges always cross an icosahedron edge
      assert_eq!(boundary.num_verts, 3, "pentagon {pent}");
    }
  }
}

#[test]
fn reversed_edges_are_distinct() {
  let origin = osaka_cell(6);
  let neighbor = edge_destination(edges_from_cell(origin).unwrap()[0]).unwrap();

  let forward = get_edge(origin, neighbor).unwrap();
  let backward = get_edge(neighbor, origin).unwrap();
  assert_ne!(forward, backward);
  assert_eq!(edge_origin(backward).unwrap(), neighbor);
  assert_eq!(edge_destination(backward).unwrap(), origin);
}
