/// 名前で読み書きするベクトルの属性
///
/// `I`, `J` はそれぞれ `X`, `Y` の別名です。`Angle` は成分から導出される角度（ラジアン）です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    X,
    Y,
    I,
    J,
    Angle,
}
