use serde::{Deserialize, Serialize};

pub mod cut;
pub mod geometry;

pub use cut::{split_polygon, try_cut_polygon};

/// 2D-точка на плоскости XY
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Вернуть точку в 3D с z = 0
    pub fn to_3d(self) -> Point3D {
        Point3D::new(self.x, self.y, 0.0)
    }
}

/// 3D-точка (или вектор направления)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Проекция на плоскость XY (отбрасывает z)
    pub fn to_2d(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Запрос на разрезание полигона плоскостью
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Вершины полигона; последняя соединяется с первой
    pub polygon: Vec<Point3D>,
    pub plane_origin: Point3D,
    /// Нормаль режущей плоскости, должна лежать в плоскости XY
    pub plane_normal: Point3D,
}

/// Пересечение режущей прямой с ребром полигона
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Индекс ребра (вершина i -> вершина i + 1 mod n)
    pub edge_index: usize,
    pub position: Point2D,
}

/// Результат разрезания
#[derive(Debug, Clone, PartialEq)]
pub enum CutOutcome {
    /// Полигон разрезан ровно на два
    Successful {
        result_polygons: Vec<Vec<Point3D>>,
    },
    /// Прямая не пересекает полигон
    NoCut,
    /// Прямая касается полигона в одной вершине
    LineVertexTangent,
    /// Прямая проходит по ребру полигона
    LineTangentToSegment,
    CutPlaneNotOrthogonal,
    PolygonNotPlanar,
    /// Больше двух пересечений
    PolygonNotConvex,
    PolygonTooFewVertices,
}

impl CutOutcome {
    /// Тег результата без данных
    pub fn info(&self) -> CutInfo {
        match self {
            CutOutcome::Successful { .. } => CutInfo::Successful,
            CutOutcome::NoCut => CutInfo::NoCut,
            CutOutcome::LineVertexTangent => CutInfo::LineVertexTangent,
            CutOutcome::LineTangentToSegment => CutInfo::LineTangentToSegment,
            CutOutcome::CutPlaneNotOrthogonal => CutInfo::CutPlaneNotOrthogonal,
            CutOutcome::PolygonNotPlanar => CutInfo::PolygonNotPlanar,
            CutOutcome::PolygonNotConvex => CutInfo::PolygonNotConvex,
            CutOutcome::PolygonTooFewVertices => CutInfo::PolygonTooFewVertices,
        }
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, CutOutcome::Successful { .. })
    }
}

/// Тег результата разрезания в том виде, в котором его видит клиент
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CutInfo {
    Successful,
    NoCut,
    LineVertexTangent,
    LineTangentToSegment,
    CutPlaneNotOrthogonal,
    PolygonNotPlanar,
    PolygonNotConvex,
    PolygonTooFewVertices,
}

impl CutInfo {
    pub const ALL: [CutInfo; 8] = [
        CutInfo::Successful,
        CutInfo::NoCut,
        CutInfo::LineVertexTangent,
        CutInfo::LineTangentToSegment,
        CutInfo::CutPlaneNotOrthogonal,
        CutInfo::PolygonNotPlanar,
        CutInfo::PolygonNotConvex,
        CutInfo::PolygonTooFewVertices,
    ];

    /// Символьное имя; serde пишет и читает именно его
    pub fn as_str(&self) -> &'static str {
        match self {
            CutInfo::Successful => "successful",
            CutInfo::NoCut => "success_no_cut",
            CutInfo::LineVertexTangent => "failed_line_vertex_tangent",
            CutInfo::LineTangentToSegment => "failed_line_on_polygon",
            CutInfo::CutPlaneNotOrthogonal => "failed_cut_plane_not_orthogonal",
            CutInfo::PolygonNotPlanar => "failed_polygon_not_on_xy_plane",
            CutInfo::PolygonNotConvex => "failed_polygon_not_convex",
            CutInfo::PolygonTooFewVertices => "failed_polygon_less_than_three_vertices",
        }
    }
}

impl std::fmt::Display for CutInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CutInfo> for String {
    fn from(info: CutInfo) -> Self {
        info.as_str().to_string()
    }
}

impl TryFrom<String> for CutInfo {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        CutInfo::ALL
            .into_iter()
            .find(|info| info.as_str() == name)
            .ok_or_else(|| format!("unknown cut info '{}'", name))
    }
}

/// Сериализуемая форма `CutOutcome`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutResult {
    pub info: CutInfo,
    pub result_polygons: Vec<Vec<Point3D>>,
}

impl From<CutOutcome> for CutResult {
    fn from(outcome: CutOutcome) -> Self {
        let info = outcome.info();
        let result_polygons = match outcome {
            CutOutcome::Successful { result_polygons } => result_polygons,
            _ => Vec::new(),
        };
        Self {
            info,
            result_polygons,
        }
    }
}
