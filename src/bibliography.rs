/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B.R. Bowring (1976): *Transformation from spatial to geographical coordinates*.
    /// Survey Review 23(181), pp. 323–327.
    Bow76,

    /// B.R. Bowring (1985): *The accuracy of geodetic latitude and height equations*.
    /// Survey Review, 28(218), pp.202-206,
    /// [DOI](https://doi.org/10.1179/sre.1985.28.218.202)
    Bow85,

    /// W.A. Heiskanen and H. Moritz (1967): *Physical Geodesy*.
    /// W.H. Freeman and Company, San Francisco. Section 5-3.
    Hm67,

    /// R.E. Burtch (2006): *A comparison of methods used in rectangular to
    /// geodetic coordinate transformations*. ACSM Annual Conference, Orlando.
    Bur06,
}
