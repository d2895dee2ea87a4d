// 轉接層：有副作用的實作，與領域型別分開

pub mod persistence;
