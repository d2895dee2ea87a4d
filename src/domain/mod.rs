// 領域層：資料模型與所有示範依賴的 trait

pub mod model;
pub mod ports;
