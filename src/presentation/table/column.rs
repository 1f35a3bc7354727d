use crate::domain::entities::Entity;
use std::fmt;

pub const CHECK: &str = "✓";
pub const CROSS: &str = "✕";

/// 真偽値セルの表示（✓ / ✕）
pub fn check_mark(value: bool) -> String {
    let mark = if value { CHECK } else { CROSS };
    mark.to_string()
}

/// 表の 1 列。ヘッダー、アクセサ（ワイヤ上のフィールド名）、セルの表示変換を持つ。
pub struct Column<E> {
    pub header: &'static str,
    pub accessor: &'static str,
    render: fn(&E) -> String,
}

impl<E> Column<E> {
    pub fn new(header: &'static str, accessor: &'static str, render: fn(&E) -> String) -> Self {
        Self {
            header,
            accessor,
            render,
        }
    }

    pub fn cell(&self, record: &E) -> String {
        (self.render)(record)
    }
}

impl<E> fmt::Debug for Column<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .finish()
    }
}

/// 表として一覧表示できるエンティティ。列構成は種別ごとに固定。
pub trait TableEntity: Entity {
    fn columns() -> Vec<Column<Self>>;
}
