use std::ops::{Index, IndexMut};

use crate::Vertex;

/// Per-vertex storage that is indexed directly by `Vertex` instead of `usize`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexVec<T> {
    data: Vec<T>,
}

impl<T: Clone> VertexVec<T> {
    pub fn with_default(size: usize, default: T) -> Self {
        Self {
            data: vec![default; size],
        }
    }
}

impl<T> VertexVec<T> {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<Vertex> for VertexVec<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: Vertex) -> &Self::Output {
        &self.data[index as usize]
    }
}

impl<T> IndexMut<Vertex> for VertexVec<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: Vertex) -> &mut Self::Output {
        &mut self.data[index as usize]
    }
}

macro_rules! vertex_vec {
    [$default:expr; $size:expr] => {
        $crate::utils::VertexVec::with_default($size as usize, $default)
    };
}
